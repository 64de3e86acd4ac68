//! Frontend Models
//!
//! Data structures matching backend records, plus the tolerant list-page
//! wrapper (the backend family returns either a bare array or an
//! `{items, total}` envelope depending on the resource).

use serde::{Deserialize, Serialize};

/// Records owned by a list store expose their server-assigned id.
pub trait Keyed {
    fn key(&self) -> u32;
}

/// One page of list results.
///
/// `total` is `None` when the backend returned a bare array; callers then
/// infer "has next page" from `len == page_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Wrapped { items: Vec<T>, total: Option<u64> },
    Bare(Vec<T>),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ListPage<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match ListBody::deserialize(deserializer)? {
            ListBody::Wrapped { items, total } => ListPage { items, total },
            ListBody::Bare(items) => ListPage { items, total: None },
        })
    }
}

impl<T> ListPage<T> {
    pub fn has_next(&self, offset: u64, page_size: usize) -> bool {
        match self.total {
            Some(total) => offset + (self.items.len() as u64) < total,
            None => self.items.len() == page_size,
        }
    }
}

// ========================
// Watch tracking
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub year: u16,
    pub category: String,
    pub watched: bool,
    #[serde(default)]
    pub parts: Vec<MoviePart>,
}

/// Sub-record of a movie. `id` is `None` until the server creates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub part_no: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: u32,
    pub title: String,
    pub year: u16,
    pub category: String,
    pub status: String,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub season_no: u32,
    pub episodes: u32,
}

// ========================
// Personal records
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordEntry {
    pub id: u32,
    pub site: String,
    pub username: String,
    pub password: String,
    pub category: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub title: String,
    /// Markdown body, rendered in the preview pane.
    pub body: String,
    /// Canonical "D MMM YYYY" form, normalized client-side before submit.
    pub note_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: u32,
    pub name: String,
    pub kind: String,
    pub amount: f64,
    pub invested_on: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: u32,
    pub name: String,
    pub rating: u8,
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub category: String,
}

// ========================
// Construction site work logs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DprEntry {
    pub id: u32,
    pub work_date: String,
    pub description: String,
    pub labour_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InwardEntry {
    pub id: u32,
    pub received_on: String,
    pub material: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: u32,
    pub expense_date: String,
    pub description: String,
    pub amount: f64,
}

macro_rules! impl_keyed {
    ($($t:ty),+ $(,)?) => {
        $(impl Keyed for $t {
            fn key(&self) -> u32 {
                self.id
            }
        })+
    };
}

impl_keyed!(
    Movie,
    Series,
    PasswordEntry,
    Note,
    Investment,
    Favorite,
    Website,
    DprEntry,
    InwardEntry,
    ExpenseEntry,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_page_decodes_bare_array() {
        let page: ListPage<Website> = serde_json::from_str(
            r#"[{"id":1,"title":"docs","url":"https://example.com","category":"ref"}]"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, None);
    }

    #[test]
    fn list_page_decodes_wrapped_shape() {
        let page: ListPage<Website> = serde_json::from_str(
            r#"{"items":[{"id":1,"title":"docs","url":"https://example.com","category":"ref"}],"total":37}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, Some(37));
    }

    #[test]
    fn has_next_uses_total_when_known() {
        let page = ListPage {
            items: vec![0u32; 10],
            total: Some(20),
        };
        assert!(page.has_next(0, 10));
        assert!(!page.has_next(10, 10));
    }

    #[test]
    fn has_next_falls_back_to_full_page_heuristic() {
        let full = ListPage {
            items: vec![0u32; 10],
            total: None,
        };
        let short = ListPage {
            items: vec![0u32; 3],
            total: None,
        };
        assert!(full.has_next(0, 10));
        assert!(!short.has_next(0, 10));
    }

    #[test]
    fn movie_parts_default_to_empty() {
        let movie: Movie = serde_json::from_str(
            r#"{"id":5,"title":"Inception","year":2010,"category":"scifi","watched":true}"#,
        )
        .unwrap();
        assert!(movie.parts.is_empty());
    }
}
