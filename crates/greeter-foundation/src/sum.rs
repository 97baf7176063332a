//! Arithmetic helpers

/// Add two numbers
pub fn calculate_sum(a: f64, b: f64) -> f64 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_sum() {
        assert_eq!(calculate_sum(2.0, 3.0), 5.0);
        assert_eq!(calculate_sum(-2.0, -3.0), -5.0);
        assert_eq!(calculate_sum(5.0, 0.0), 5.0);
        assert_eq!(calculate_sum(1.5, 2.5), 4.0);
    }
}
