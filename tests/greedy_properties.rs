//! Property checks for the graph, search, sort and greedy layers
//!
//! Random inputs come from seeded generators so failures reproduce.

use greedy_tsp::{
    complete_segments, greedy_tour, sort_segments, ConnectivityOracle, Decision, Graph, Search,
    Segment, TourBuilder, TourOptions,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random simple graph: no self-loops, no duplicate edges
fn random_graph(rng: &mut StdRng, n: usize, attempts: usize) -> Graph {
    let mut g = Graph::new(n).unwrap();
    for _ in 0..attempts {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v && !g.has_edge(u, v).unwrap() {
            g.add_edge(u, v).unwrap();
        }
    }
    g
}

/// All-pairs hop counts by repeated relaxation over the adjacency matrix
fn brute_force_hops(g: &Graph) -> Vec<Vec<Option<usize>>> {
    let n = g.size();
    let mut hops = vec![vec![None; n]; n];
    for u in 0..n {
        hops[u][u] = Some(0);
        for v in 0..n {
            if g.has_edge(u, v).unwrap() {
                hops[u][v] = Some(1);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (hops[i][k], hops[k][j]) {
                    if hops[i][j].map_or(true, |c| a + b < c) {
                        hops[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    hops
}

fn random_points(rng: &mut StdRng, n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|_| (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect()
}

fn euclid(p: (f64, f64), q: (f64, f64)) -> f64 {
    ((p.0 - q.0).powi(2) + (p.1 - q.1).powi(2)).sqrt()
}

#[test]
fn test_symmetry_and_degree_consistency() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let n = rng.gen_range(1..12);
        let g = random_graph(&mut rng, n, 30);

        for u in 0..n {
            let mut neighbors = 0;
            for v in 0..n {
                let forward = g.has_edge(u, v).unwrap();
                assert_eq!(forward, g.has_edge(v, u).unwrap(), "asymmetric at ({u}, {v})");
                if forward {
                    neighbors += 1;
                }
            }
            assert_eq!(g.degree(u).unwrap(), neighbors);
        }
    }
}

#[test]
fn test_bfs_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..40 {
        let n = rng.gen_range(1..10);
        let attempts = rng.gen_range(0..15);
        let g = random_graph(&mut rng, n, attempts);
        let hops = brute_force_hops(&g);

        for s in 0..n {
            let search = Search::run(&g, s).unwrap();
            for v in 0..n {
                assert_eq!(search.distance_to(v).unwrap(), hops[s][v], "from {s} to {v}");
                assert_eq!(search.reachable(v).unwrap(), hops[s][v].is_some());
            }
        }
    }
}

#[test]
fn test_paths_are_valid() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..40 {
        let n = rng.gen_range(2..10);
        let g = random_graph(&mut rng, n, 12);

        for s in 0..n {
            let search = Search::run(&g, s).unwrap();
            for v in 0..n {
                match search.distance_to(v).unwrap() {
                    None => assert_eq!(search.path_to(v).unwrap(), None),
                    Some(d) => {
                        let path = search.path_to(v).unwrap().unwrap();
                        assert_eq!(path.len(), d + 1);
                        assert_eq!(path[0], s);
                        assert_eq!(path[d], v);
                        assert!(path.windows(2).all(|w| g.has_edge(w[0], w[1]).unwrap()));
                    }
                }
            }
        }
    }
}

#[test]
fn test_sort_is_stable_and_ordered() {
    let mut rng = StdRng::seed_from_u64(17);
    for len in [0, 1, 2, 3, 10, 64, 101] {
        let segments: Vec<Segment> = (0..len)
            .map(|i| Segment::new(i, i + 1, rng.gen_range(0..4) as f64).unwrap())
            .collect();

        let sorted = sort_segments(&segments);
        assert_eq!(sorted.len(), len);
        assert!(sorted.windows(2).all(|w| w[0].distance <= w[1].distance));

        let mut expected = segments.clone();
        expected.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        assert_eq!(sorted, expected);
    }
}

#[test]
fn test_degree_never_exceeds_two() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..20 {
        let n = rng.gen_range(2..15);
        let points = random_points(&mut rng, n);
        let segments = complete_segments(n, |i, j| euclid(points[i], points[j])).unwrap();
        let sorted = sort_segments(&segments);

        let mut builder = TourBuilder::new(n, &TourOptions::default()).unwrap();
        for segment in &sorted {
            builder.consider(segment).unwrap();
            for v in 0..n {
                assert!(builder.graph().degree(v).unwrap() <= 2);
            }
        }
        assert!(builder.is_spanning());
        assert_eq!(builder.graph().edge_count(), n - 1);
    }
}

#[test]
fn test_oracles_agree() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..20 {
        let n = rng.gen_range(2..20);
        let points = random_points(&mut rng, n);
        let segments = complete_segments(n, |i, j| euclid(points[i], points[j])).unwrap();
        let sorted = sort_segments(&segments);

        let bfs_options = TourOptions::with_oracle(ConnectivityOracle::Bfs);
        let uf_options = TourOptions::with_oracle(ConnectivityOracle::UnionFind);
        let mut bfs = TourBuilder::new(n, &bfs_options).unwrap();
        let mut uf = TourBuilder::new(n, &uf_options).unwrap();
        for segment in &sorted {
            let a: Decision = bfs.consider(segment).unwrap();
            let b: Decision = uf.consider(segment).unwrap();
            assert_eq!(a, b, "decisions diverge at ({}, {})", segment.from, segment.to);
        }

        assert_eq!(bfs.finish(&sorted).unwrap(), uf.finish(&sorted).unwrap());
    }
}

#[test]
fn test_tours_are_closed_hamiltonian_cycles() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..30 {
        let n = rng.gen_range(2..25);
        let points = random_points(&mut rng, n);
        let segments = complete_segments(n, |i, j| euclid(points[i], points[j])).unwrap();
        let tour = greedy_tour(n, &segments, &TourOptions::default()).unwrap();

        assert_eq!(tour.order.len(), n + 1);
        assert_eq!(tour.order[0], 0);
        assert_eq!(tour.order[n], 0);
        let mut seen = tour.order[..n].to_vec();
        seen.sort_unstable();
        assert_eq!(seen, (0..n).collect::<Vec<_>>());

        let walked: f64 = tour
            .order
            .windows(2)
            .map(|w| euclid(points[w[0]], points[w[1]]))
            .sum();
        assert!((walked - tour.total_distance).abs() < 1e-6);
    }
}

#[test]
fn test_worked_example() {
    let d = [
        [0.0, 1.0, 3.0, 4.0],
        [1.0, 0.0, 2.0, 5.0],
        [3.0, 2.0, 0.0, 1.0],
        [4.0, 5.0, 1.0, 0.0],
    ];
    let segments = complete_segments(4, |i, j| d[i][j]).unwrap();

    let sorted = sort_segments(&segments);
    let order: Vec<(usize, usize, f64)> = sorted
        .iter()
        .map(|s| (s.from, s.to, s.distance))
        .collect();
    assert_eq!(
        order,
        vec![(0, 1, 1.0), (2, 3, 1.0), (1, 2, 2.0), (0, 2, 3.0), (0, 3, 4.0), (1, 3, 5.0)]
    );

    for oracle in [ConnectivityOracle::Bfs, ConnectivityOracle::UnionFind] {
        let tour = greedy_tour(4, &segments, &TourOptions::with_oracle(oracle)).unwrap();
        assert_eq!(tour.order, vec![0, 3, 2, 1, 0]);
        assert_eq!(format!("{:.2}", tour.total_distance), "8.00");
    }
}

#[test]
fn test_vertex_zero_inside_the_path() {
    // Vertex 0 sits between 1 and 2 on a line, so it is not an open endpoint
    let x = [0.0_f64, -1.0, 2.0];
    let segments = complete_segments(3, |i, j| (x[i] - x[j]).abs()).unwrap();
    let tour = greedy_tour(3, &segments, &TourOptions::default()).unwrap();

    assert_eq!(tour.order, vec![0, 1, 2, 0]);
    assert_eq!(tour.total_distance, 6.0);
}

#[test]
fn test_equal_distances_follow_input_order() {
    // Unit square: four sides of length 1, two diagonals of length sqrt(2)
    let pts = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let segments = complete_segments(4, |i, j| euclid(pts[i], pts[j])).unwrap();
    let tour = greedy_tour(4, &segments, &TourOptions::default()).unwrap();

    // Sides in input order: (0,1) (0,3) (1,2) (2,3); the first three are kept
    assert_eq!(tour.order, vec![0, 1, 2, 3, 0]);
    assert!((tour.total_distance - 4.0).abs() < 1e-12);
}
