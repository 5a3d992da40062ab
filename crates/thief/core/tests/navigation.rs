use thief_core::{
    Cell, Direction, NavigationGraph, PathCost, PathFinder, PcgRng, RngOracle, TerrainCode,
    TerrainMemory,
};

const CODES: [i32; 8] = [-2, -1, 0, 0, 0, 1, 4, 100];

fn random_memory(rng: &mut PcgRng) -> TerrainMemory {
    let mut memory = TerrainMemory::new();
    for cell in Cell::all() {
        let code = CODES[rng.below(CODES.len() as u32) as usize];
        memory.set(cell, TerrainCode(code));
    }
    memory
}

fn block_with_center_wall() -> TerrainMemory {
    let mut memory = TerrainMemory::new();
    for row in 0..5 {
        for col in 0..5 {
            memory.set(Cell::new(row, col), TerrainCode::EMPTY);
        }
    }
    memory.set(Cell::new(2, 2), TerrainCode::WALL);
    memory
}

#[test]
fn every_edge_is_a_unit_step_matching_its_direction() {
    let mut rng = PcgRng::seeded(2024);
    for _ in 0..10 {
        let memory = random_memory(&mut rng);
        let graph = NavigationGraph::from_memory(&memory);

        for (from, edge) in graph.edges() {
            assert_eq!(from.manhattan(edge.to), 1);
            let (d_row, d_col) = edge.direction.delta();
            assert_eq!(from.offset(d_row, d_col), edge.to);
            assert!(memory.is_traversable(from));
            assert!(memory.is_traversable(edge.to));
            assert_eq!(
                graph.direction_between(edge.to, from),
                Some(edge.direction.opposite())
            );
        }
    }
}

#[test]
fn direction_codes_follow_row_col_convention() {
    let mut memory = TerrainMemory::new();
    let center = Cell::new(10, 10);
    memory.set(center, TerrainCode::EMPTY);
    let graph = NavigationGraph::from_memory(&memory);

    let code_to = |cell: Cell| graph.direction_between(center, cell).map(Direction::code);
    assert_eq!(code_to(Cell::new(9, 10)), Some(1));
    assert_eq!(code_to(Cell::new(11, 10)), Some(2));
    assert_eq!(code_to(Cell::new(10, 11)), Some(3));
    assert_eq!(code_to(Cell::new(10, 9)), Some(4));
}

#[test]
fn found_paths_are_valid_walks() {
    let mut rng = PcgRng::seeded(77);
    let memory = random_memory(&mut rng);
    let graph = NavigationGraph::from_memory(&memory);
    let nodes: Vec<Cell> = graph.nodes().collect();

    for cost in [PathCost::Heuristic, PathCost::Accumulated] {
        let finder = PathFinder::new(cost);
        let mut found = 0;
        for _ in 0..60 {
            let origin = *rng.choose(&nodes).unwrap();
            let destination = *rng.choose(&nodes).unwrap();
            let Some(path) = finder.search(&graph, origin, destination, &mut rng) else {
                continue;
            };
            found += 1;

            assert_eq!(path.origin(), Some(origin));
            assert_eq!(path.destination(), Some(destination));
            assert!(path.len() <= graph.node_count());
            for pair in path.cells().windows(2) {
                assert!(graph.direction_between(pair[0], pair[1]).is_some());
            }
            let mut unique = path.cells().to_vec();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), path.len());
        }
        assert!(found > 0);
    }
}

#[test]
fn detour_around_center_wall_has_nine_cells() {
    let graph = NavigationGraph::from_memory(&block_with_center_wall());

    for seed in 0..25 {
        let mut rng = PcgRng::seeded(seed);
        let path = PathFinder::default()
            .search(&graph, Cell::new(0, 0), Cell::new(4, 4), &mut rng)
            .unwrap();

        assert_eq!(path.len(), 9);
        assert!(!path.cells().contains(&Cell::new(2, 2)));
    }
}

#[test]
fn ties_are_broken_by_the_seeded_source() {
    let graph = NavigationGraph::from_memory(&block_with_center_wall());
    let first_steps: Vec<_> = (0..20)
        .map(|seed| {
            let mut rng = PcgRng::seeded(seed);
            PathFinder::default()
                .search(&graph, Cell::new(0, 0), Cell::new(4, 4), &mut rng)
                .unwrap()
                .next_cell()
        })
        .collect();

    assert!(first_steps.contains(&Some(Cell::new(0, 1))));
    assert!(first_steps.contains(&Some(Cell::new(1, 0))));

    // Same seed, same answer.
    let run = |seed| {
        let mut rng = PcgRng::seeded(seed);
        PathFinder::default().search(&graph, Cell::new(0, 0), Cell::new(4, 4), &mut rng)
    };
    assert_eq!(run(5), run(5));
}

#[test]
fn isolated_node_has_no_path_even_to_itself() {
    let mut memory = TerrainMemory::new();
    let cell = Cell::new(5, 5);
    memory.set(cell, TerrainCode::EMPTY);
    for direction in Direction::ALL {
        memory.set(cell.neighbor(direction).unwrap(), TerrainCode::WALL);
    }
    let graph = NavigationGraph::from_memory(&memory);
    let mut rng = PcgRng::seeded(1);

    assert!(graph.neighbors(cell).is_empty());
    assert!(PathFinder::default().search(&graph, cell, cell, &mut rng).is_none());
    assert!(
        PathFinder::default()
            .search(&graph, cell, Cell::new(0, 0), &mut rng)
            .is_none()
    );
}
