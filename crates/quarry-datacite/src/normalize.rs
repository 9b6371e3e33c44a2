//! Metadata normalizer - DataCite payloads to canonical Dataset records
//!
//! Every optional field follows a fallback chain, first match wins, and a
//! missing field always degrades to absent instead of failing. The two
//! invariants the normalizer guarantees: `id` and `publication_date` are
//! populated even for an impoverished payload.

use quarry_domain::dataset::truncate_display;
use quarry_domain::{dates, Dataset, DatasetMetadata, Repository, MAX_DISPLAY_LEN};

use crate::payload::{Creator, DoiAttributes, DoiRecord};

/// Placeholder title for records with no usable title
pub const UNTITLED: &str = "Untitled Dataset";

/// Placeholder description for records with no usable description
pub const NO_DESCRIPTION: &str = "No description available";

/// Placeholder author for creator entries with no usable name
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Map one DOI record to a canonical [`Dataset`]
///
/// A record with no `attributes` bag at all is tolerated: every attribute
/// is treated as absent and the placeholders apply.
pub fn normalize_record(record: &DoiRecord) -> Dataset {
    let default_attrs = DoiAttributes::default();
    let attrs = record.attributes.as_ref().unwrap_or(&default_attrs);

    let id = record
        .id
        .clone()
        .filter(|s| !s.is_empty())
        .or_else(|| attrs.doi.clone().filter(|s| !s.is_empty()))
        .or_else(|| match (&attrs.prefix, &attrs.suffix) {
            (Some(prefix), Some(suffix)) => Some(format!("{}/{}", prefix, suffix)),
            _ => None,
        })
        .unwrap_or_default();

    let title = attrs
        .titles
        .first()
        .and_then(|t| t.title.clone())
        .filter(|s| !s.is_empty())
        .or_else(|| attrs.title.clone().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| UNTITLED.to_string());

    let description = attrs
        .descriptions
        .first()
        .and_then(|d| d.description.clone())
        .filter(|s| !s.is_empty())
        .or_else(|| attrs.abstract_text.clone().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let url = attrs
        .url
        .clone()
        .filter(|s| !s.is_empty())
        .or_else(|| {
            attrs
                .doi
                .as_ref()
                .filter(|s| !s.is_empty())
                .map(|doi| format!("https://doi.org/{}", doi))
        })
        .unwrap_or_default();

    Dataset {
        id,
        title: truncate_display(&title, MAX_DISPLAY_LEN),
        description: truncate_display(&description, MAX_DISPLAY_LEN),
        url,
        repository: Repository::DataCite,
        metadata: normalize_attributes(attrs),
    }
}

/// Map the attributes bag to [`DatasetMetadata`]
fn normalize_attributes(attrs: &DoiAttributes) -> DatasetMetadata {
    let authors: Vec<String> = attrs
        .creators
        .iter()
        .map(creator_display_name)
        .filter(|name| !name.is_empty())
        .collect();

    DatasetMetadata {
        authors: if authors.is_empty() { None } else { Some(authors) },
        publication_date: publication_date(attrs),
        license: attrs
            .rights_list
            .first()
            .and_then(|r| r.rights.clone())
            .filter(|s| !s.is_empty()),
        format: if attrs.formats.is_empty() {
            None
        } else {
            Some(attrs.formats.clone())
        },
        size: if attrs.sizes.is_empty() {
            None
        } else {
            Some(attrs.sizes.join(", "))
        },
        doi: attrs.doi.clone().filter(|s| !s.is_empty()),
        keywords: {
            let keywords: Vec<String> = attrs
                .subjects
                .iter()
                .filter_map(|s| s.subject.clone())
                .filter(|s| !s.is_empty())
                .collect();
            if keywords.is_empty() {
                None
            } else {
                Some(keywords)
            }
        },
        version: attrs.version.clone().filter(|s| !s.is_empty()),
    }
}

/// Display name for one creator entry
///
/// Chain: explicit name, then "given family", then whichever of the two
/// is present, then the placeholder. Empty strings count as missing, so
/// a family-only creator never renders as "<blank> Family".
fn creator_display_name(creator: &Creator) -> String {
    let given = creator.given_name.as_deref().filter(|s| !s.is_empty());
    let family = creator.family_name.as_deref().filter(|s| !s.is_empty());

    if let Some(name) = creator.name.as_deref().filter(|s| !s.is_empty()) {
        return name.to_string();
    }
    match (given, family) {
        (Some(given), Some(family)) => format!("{} {}", given, family),
        (Some(given), None) => given.to_string(),
        (None, Some(family)) => family.to_string(),
        (None, None) => UNKNOWN_AUTHOR.to_string(),
    }
}

/// Derive the publication date; never returns an empty string
///
/// Chain: `publicationYear` as `<year>-01-01`, then the dates sequence
/// (Issued, then Created, then the first entry), then the current
/// timestamp.
fn publication_date(attrs: &DoiAttributes) -> String {
    if let Some(year) = attrs.publication_year {
        return format!("{}-01-01", year);
    }

    let by_type = |wanted: &str| {
        attrs
            .dates
            .iter()
            .find(|d| d.date_type.as_deref() == Some(wanted))
            .and_then(|d| d.date.clone())
            .filter(|s| !s.is_empty())
    };

    by_type("Issued")
        .or_else(|| by_type("Created"))
        .or_else(|| {
            attrs
                .dates
                .first()
                .and_then(|d| d.date.clone())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(dates::now_iso)
}
