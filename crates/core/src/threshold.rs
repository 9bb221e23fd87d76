//! Threshold evaluation and supervisor alert text.

/// Whether reported usage is over the configured limit.
///
/// Reaching the limit exactly does not count as exceeding it.
pub fn is_exceeded(current_usage: f64, limit_amount: f64) -> bool {
    current_usage > limit_amount
}

/// Message sent to a supervisor when an employee's threshold is exceeded.
pub fn alert_message(employee_name: &str) -> String {
    format!("Employee {employee_name} exceeded the threshold!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_above_limit_is_exceeded() {
        assert!(is_exceeded(150.0, 100.0));
    }

    #[test]
    fn usage_at_limit_is_not_exceeded() {
        assert!(!is_exceeded(100.0, 100.0));
        assert!(!is_exceeded(0.0, 100.0));
    }

    #[test]
    fn alert_message_names_the_employee() {
        assert_eq!(alert_message("Bob"), "Employee Bob exceeded the threshold!");
    }
}
