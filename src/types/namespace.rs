use std::fmt;

/// A PeeringDB collection endpoint, e.g. `net` in `https://www.peeringdb.com/api/net`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Namespace {
    Campus,
    Carrier,
    CarrierFacility,
    Facility,
    InternetExchange,
    InternetExchangeFacility,
    InternetExchangeLan,
    InternetExchangePrefix,
    Network,
    NetworkContact,
    NetworkFacility,
    NetworkInternetExchangeLan,
    Organization,
}

impl Namespace {
    pub const ALL: [Namespace; 13] = [
        Namespace::Campus,
        Namespace::Carrier,
        Namespace::CarrierFacility,
        Namespace::Facility,
        Namespace::InternetExchange,
        Namespace::InternetExchangeFacility,
        Namespace::InternetExchangeLan,
        Namespace::InternetExchangePrefix,
        Namespace::Network,
        Namespace::NetworkContact,
        Namespace::NetworkFacility,
        Namespace::NetworkInternetExchangeLan,
        Namespace::Organization,
    ];

    /// The URL path segment of this collection.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Namespace::Campus => "campus",
            Namespace::Carrier => "carrier",
            Namespace::CarrierFacility => "carrierfac",
            Namespace::Facility => "fac",
            Namespace::InternetExchange => "ix",
            Namespace::InternetExchangeFacility => "ixfac",
            Namespace::InternetExchangeLan => "ixlan",
            Namespace::InternetExchangePrefix => "ixpfx",
            Namespace::Network => "net",
            Namespace::NetworkContact => "poc",
            Namespace::NetworkFacility => "netfac",
            Namespace::NetworkInternetExchangeLan => "netixlan",
            Namespace::Organization => "org",
        }
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_path_segments_are_unique() {
        let segments: HashSet<_> = Namespace::ALL.iter().map(Namespace::as_str).collect();
        assert_eq!(segments.len(), Namespace::ALL.len());
    }
}
