use crate::roster::Severity;

/// Canned route heuristic: maps severity to a route label and ETA.
///
/// Pure and total over the severity enum; repeated calls with the same input
/// yield identical output.
pub fn route_for(severity: Severity) -> (&'static str, u32) {
    match severity {
        Severity::High => ("Emergency Green Corridor", 12),
        Severity::Medium => ("Traffic-Aware City Route", 18),
        Severity::Low => ("Normal Shortest Route", 25),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_mapping_is_fixed() {
        assert_eq!(route_for(Severity::High), ("Emergency Green Corridor", 12));
        assert_eq!(route_for(Severity::Medium), ("Traffic-Aware City Route", 18));
        assert_eq!(route_for(Severity::Low), ("Normal Shortest Route", 25));
    }

    #[test]
    fn route_is_deterministic() {
        for severity in Severity::ALL {
            assert_eq!(route_for(severity), route_for(severity));
        }
    }
}
