/// Asserts that every listed cell is alive.
#[macro_export]
macro_rules! assert_alive {
    ($grid:expr, $( ($x:expr, $y:expr) ),+ $(,)?) => {
        $(
            assert!(
                $grid.is_alive($x, $y),
                "Cell ({}, {}) should be alive",
                $x,
                $y
            );
        )+
    };
}

/// Asserts that every listed cell is dead.
#[macro_export]
macro_rules! assert_dead {
    ($grid:expr, $( ($x:expr, $y:expr) ),+ $(,)?) => {
        $(
            assert!(
                !$grid.is_alive($x, $y),
                "Cell ({}, {}) should be dead",
                $x,
                $y
            );
        )+
    };
}

/// Asserts that the live-cell count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($grid:expr, $count:expr) => {
        assert_eq!($grid.population(), $count, "Population count mismatch");
    };
}
