use serde::Deserialize;

/// Record status
#[derive(Deserialize, Debug, Default, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Ok,
    Pending,
    Deleted,
    #[serde(other)]
    Other,
}

impl Status {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Pending => "pending",
            Status::Deleted => "deleted",
            Status::Other => "other",
        }
    }
}

/// Status values PeeringDB accepts as a search parameter.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StatusFilter {
    Ok,
    Pending,
    Deleted,
}

impl StatusFilter {
    pub const fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Ok => "ok",
            StatusFilter::Pending => "pending",
            StatusFilter::Deleted => "deleted",
        }
    }
}

impl PartialEq<Status> for StatusFilter {
    fn eq(&self, other: &Status) -> bool {
        self.as_str() == other.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("\"ok\"", Status::Ok)]
    #[case("\"pending\"", Status::Pending)]
    #[case("\"deleted\"", Status::Deleted)]
    #[case("\"archived\"", Status::Other)]
    fn test_deserialize_status(#[case] json: &str, #[case] expected: Status) {
        let actual: Status = serde_json::from_str(json).unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case(StatusFilter::Ok, Status::Ok)]
    #[case(StatusFilter::Pending, Status::Pending)]
    #[case(StatusFilter::Deleted, Status::Deleted)]
    fn test_filter_matches_status(#[case] filter: StatusFilter, #[case] status: Status) {
        assert_eq!(filter, status);
        assert_ne!(filter, Status::Other);
    }
}
