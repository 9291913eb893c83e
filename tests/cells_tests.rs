use solo_battleship::{BoardCells, CellSet, CellSetError, Coordinate};

#[test]
fn test_try_new_sizes() {
    assert!(CellSet::<u64, 8>::try_new().is_ok());
    assert!(BoardCells::try_new().is_ok());
    let err = CellSet::<u8, 3>::try_new();
    assert!(matches!(err, Err(CellSetError::SizeTooLarge { .. })));
}

#[test]
fn test_insert_contains() {
    let mut set = CellSet::<u16, 4>::new();
    assert!(set.is_empty());
    assert_eq!(set.insert(Coordinate::new(1, 1)), Ok(true));
    assert_eq!(set.insert(Coordinate::new(1, 1)), Ok(false));
    assert!(set.contains(Coordinate::new(1, 1)));
    assert!(!set.contains(Coordinate::new(1, 2)));
    assert!(!set.contains(Coordinate::new(9, 9)));
    assert_eq!(set.len(), 1);
    assert_eq!(
        set.insert(Coordinate::new(4, 0)),
        Err(CellSetError::IndexOutOfBounds { row: 4, col: 0 })
    );
}

#[test]
fn test_iter_and_intersects() {
    let a = CellSet::<u16, 4>::from_cells([Coordinate::new(3, 3), Coordinate::new(0, 1)]).unwrap();
    let cells: Vec<_> = a.iter().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 1), Coordinate::new(3, 3)]);

    let b = CellSet::<u16, 4>::from_cells([Coordinate::new(0, 1)]).unwrap();
    let c = CellSet::<u16, 4>::from_cells([Coordinate::new(2, 2)]).unwrap();
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert_eq!((a | c).len(), 3);
    assert_eq!(a & b, b);
}
