use solo_battleship::{BoardError, Coordinate, Orientation, Ship};

#[test]
fn test_new_lays_out_cells() -> Result<(), BoardError> {
    let ship = Ship::new(Coordinate::new(2, 1), Orientation::Horizontal, 3, 5)?;
    assert_eq!(
        ship.cells(),
        &[Coordinate::new(2, 1), Coordinate::new(2, 2), Coordinate::new(2, 3)]
    );
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert_eq!(ship.origin(), Coordinate::new(2, 1));

    let ship = Ship::new(Coordinate::new(0, 4), Orientation::Vertical, 4, 5)?;
    let cells: Vec<_> = ship.cells().to_vec();
    assert_eq!(cells, (0..4).map(|r| Coordinate::new(r, 4)).collect::<Vec<_>>());
    assert_eq!(ship.orientation(), Orientation::Vertical);
    assert!(!ship.contains(Coordinate::new(4, 4)));
    Ok(())
}

#[test]
fn test_new_rejects_out_of_bounds() {
    assert_eq!(
        Ship::new(Coordinate::new(0, 3), Orientation::Horizontal, 3, 5).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::new(Coordinate::new(5, 0), Orientation::Horizontal, 1, 5).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::new(Coordinate::new(0, 0), Orientation::Vertical, 0, 5).unwrap_err(),
        BoardError::EmptyShip
    );
}

#[test]
fn test_from_cells_requires_straight_line() {
    let bent = vec![Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(1, 1)];
    assert_eq!(Ship::from_cells(bent, 5).unwrap_err(), BoardError::ShipNotContiguous);

    let gap = vec![Coordinate::new(0, 0), Coordinate::new(0, 2)];
    assert_eq!(Ship::from_cells(gap, 5).unwrap_err(), BoardError::ShipNotContiguous);

    let diagonal = vec![Coordinate::new(0, 0), Coordinate::new(1, 1)];
    assert_eq!(Ship::from_cells(diagonal, 5).unwrap_err(), BoardError::ShipNotContiguous);

    let repeated = vec![Coordinate::new(1, 1), Coordinate::new(1, 1)];
    assert_eq!(Ship::from_cells(repeated, 5).unwrap_err(), BoardError::ShipNotContiguous);

    assert_eq!(Ship::from_cells(vec![], 5).unwrap_err(), BoardError::EmptyShip);
    assert_eq!(
        Ship::from_cells(vec![Coordinate::new(0, 5)], 5).unwrap_err(),
        BoardError::ShipOutOfBounds
    );

    let vertical = vec![Coordinate::new(1, 3), Coordinate::new(2, 3), Coordinate::new(3, 3)];
    assert!(Ship::from_cells(vertical, 5).is_ok());
}

#[test]
fn test_sunk_uses_own_length() -> Result<(), BoardError> {
    for length in 1..=5 {
        let mut ship = Ship::new(Coordinate::new(1, 0), Orientation::Horizontal, length, 6)?;
        for col in 0..length {
            assert!(!ship.is_sunk(), "length {} sunk after {} hits", length, col);
            assert!(ship.register_hit(Coordinate::new(1, col)));
            assert_eq!(ship.hits_taken(), col + 1);
        }
        assert!(ship.is_sunk(), "length {} not sunk after every cell hit", length);
    }
    Ok(())
}

#[test]
fn test_register_hit_ignores_foreign_cells() -> Result<(), BoardError> {
    let mut ship = Ship::new(Coordinate::new(0, 0), Orientation::Vertical, 2, 4)?;
    assert!(!ship.register_hit(Coordinate::new(0, 1)));
    assert_eq!(ship.hits_taken(), 0);
    assert!(ship.register_hit(Coordinate::new(1, 0)));
    assert!(ship.is_hit(Coordinate::new(1, 0)));
    assert!(!ship.is_hit(Coordinate::new(0, 0)));
    // hitting the same cell twice does not count twice
    assert!(ship.register_hit(Coordinate::new(1, 0)));
    assert_eq!(ship.hits_taken(), 1);
    assert!(!ship.is_sunk());
    Ok(())
}

#[test]
fn test_new_rejects_far_origin_without_overflow() {
    let far = usize::MAX;
    assert_eq!(
        Ship::new(Coordinate::new(far, 0), Orientation::Vertical, 2, 5).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::new(Coordinate::new(0, far), Orientation::Horizontal, 2, 5).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::new(Coordinate::new(0, 0), Orientation::Horizontal, usize::MAX, 5).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
}
