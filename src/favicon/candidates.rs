//! Fallback candidate URL generation
//!
//! Pure function from favicon key to ordered candidate list, decoupled
//! from the transport so the order is testable without any network.

/// Path suffix variants tried for every domain, in order.
const VARIANTS: [&str; 4] = ["", "-1", "-2", "-3"];

/// Build the ordered candidate URL list for a favicon key.
///
/// The key is split on `.`; the exact host is tried first, then each
/// parent domain obtained by stripping the left-most label, with all four
/// path variants per domain. A single remaining label is not resolvable
/// as a domain and produces no candidates.
pub fn candidate_urls(fav_key: &str, origin: &str, size: &str) -> Vec<String> {
    let mut labels: Vec<&str> = fav_key.split('.').collect();
    let mut urls = Vec::new();

    while labels.len() >= 2 {
        let domain = labels.join(".");
        for variant in VARIANTS {
            urls.push(format!("{}/websites/{}/{}{}.png", origin, domain, size, variant));
        }
        labels.remove(0);
    }

    urls
}
