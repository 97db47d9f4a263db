use serde::{Deserialize, Serialize};

/// Fixed catalog of seat numbers for a venue, `1..=capacity` in ascending
/// order. Built once at construction and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatChart {
    seats: Vec<u32>,
}

impl SeatChart {
    pub fn new(capacity: u32) -> Self {
        Self {
            seats: (1..=capacity).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Seat numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.seats.iter().copied()
    }

    pub fn contains(&self, seat_number: u32) -> bool {
        seat_number >= 1 && seat_number as usize <= self.seats.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_numbers_seats_from_one() {
        let chart = SeatChart::new(5);
        assert_eq!(chart.len(), 5);
        assert_eq!(chart.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn contains_checks_the_numeric_range() {
        let chart = SeatChart::new(3);
        assert!(chart.contains(1));
        assert!(chart.contains(3));
        assert!(!chart.contains(0));
        assert!(!chart.contains(4));
    }
}
