/// Cell holds the liveness value of a single grid position.
/// Zero (or anything below) is dead, any positive value is alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Cell(pub i32);

impl Cell {
    pub const DEAD: Cell = Cell(0);
    pub const ALIVE: Cell = Cell(1);

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.0 > 0
    }

    /// Raw liveness value
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives, keeping its value
    /// 2. Dead cell with exactly 3 neighbors becomes alive with value 1
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self.is_alive(), neighbors) {
            (true, 2 | 3) => self,
            (false, 3) => Cell::ALIVE,
            _ => Cell::DEAD,
        }
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::ALIVE.evolve(0), Cell::DEAD);
        assert_eq!(Cell::ALIVE.evolve(1), Cell::DEAD);
    }

    #[test]
    fn test_survival_keeps_value() {
        assert_eq!(Cell::ALIVE.evolve(2), Cell::ALIVE);
        assert_eq!(Cell(5).evolve(3), Cell(5));
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::ALIVE.evolve(4), Cell::DEAD);
        assert_eq!(Cell(7).evolve(8), Cell::DEAD);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::DEAD.evolve(3), Cell::ALIVE);
        assert_eq!(Cell::DEAD.evolve(2), Cell::DEAD);
    }

    #[test]
    fn test_negative_is_dead() {
        assert!(!Cell(-3).is_alive());
        assert_eq!(Cell(-3).evolve(2), Cell::DEAD);
        assert_eq!(Cell(-3).evolve(3), Cell::ALIVE);
    }
}
