use serde::Serialize;
use url::Url;

/// Best-guess posting details derived from a job URL. Transient only, used
/// to fill unspecified fields at creation time or echoed back to the caller.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct JobInfo {
    pub title: String,
    pub company: String,
    pub location: String,
}

/// Known job boards and career sites, checked in order against the
/// lower-cased hostname. First match wins.
const COMPANY_RULES: &[(&[&str], &str)] = &[
    (&["linkedin.com"], "LinkedIn"),
    (&["indeed.com"], "Indeed"),
    (&["glassdoor.com"], "Glassdoor"),
    (&["google.com"], "Google"),
    (&["microsoft.com"], "Microsoft"),
    (&["apple.com"], "Apple"),
    (&["amazon.com", "amazon.jobs"], "Amazon"),
    (&["meta.com"], "Meta"),
    (&["netflix.com"], "Netflix"),
    (&["salesforce.com"], "Salesforce"),
    (&["openai.com"], "OpenAI"),
];

/// Ordered most specific first: "senior-product-manager" contains
/// "product-manager", so the broader pattern has to come later. An "intern"
/// path yields the intern title whether or not "product-management" is
/// present.
const TITLE_RULES: &[(&[&str], &str)] = &[
    (&["senior-product-manager"], "Senior Product Manager"),
    (&["associate-product-manager", "apm"], "Associate Product Manager"),
    (&["intern"], "Product Management Intern"),
    (&["product-manager", "productmanager"], "Product Manager"),
];
const DEFAULT_TITLE: &str = "Product Management Position";

const LOCATION_RULES: &[(&[&str], &str)] = &[
    (&["san-francisco", "sf"], "San Francisco, CA"),
    (&["mountain-view"], "Mountain View, CA"),
    (&["seattle"], "Seattle, WA"),
    (&["cupertino"], "Cupertino, CA"),
    (&["menlo-park"], "Menlo Park, CA"),
    (&["los-gatos"], "Los Gatos, CA"),
    (&["remote"], "Remote"),
];
const DEFAULT_LOCATION: &str = "Location TBD";

fn first_match<'a>(haystack: &str, rules: &[(&[&str], &'a str)], default: &'a str) -> &'a str {
    rules
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|pattern| haystack.contains(pattern)))
        .map(|(_, result)| *result)
        .unwrap_or(default)
}

fn company_from_hostname(hostname: &str) -> String {
    for (patterns, company) in COMPANY_RULES {
        if patterns.iter().any(|pattern| hostname.contains(pattern)) {
            return (*company).to_string();
        }
    }
    // Unknown domain: second-to-last label with its first letter upper-cased.
    let labels: Vec<&str> = hostname.split('.').collect();
    if labels.len() < 2 {
        return String::new();
    }
    let name = labels[labels.len() - 2];
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Pure function from a URL string to a `{title, company, location}` guess.
/// An unparseable URL yields empty fields rather than an error.
pub fn extract_job_info(url: &str) -> JobInfo {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!("could not parse job url {:?}: {}", url, err);
            return JobInfo::default();
        }
    };
    let hostname = parsed.host_str().unwrap_or("").to_lowercase();
    let path = parsed.path().to_lowercase();
    JobInfo {
        title: first_match(&path, TITLE_RULES, DEFAULT_TITLE).to_string(),
        company: company_from_hostname(&hostname),
        location: first_match(&path, LOCATION_RULES, DEFAULT_LOCATION).to_string(),
    }
}
