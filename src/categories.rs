//! Static table of Adnkronos feed categories.
//!
//! The table is compile-time data: an ordered array so the menu always
//! prints in the same order, with a linear scan for lookup (eight entries
//! make anything cleverer pointless).

/// A selectable news category mapping a menu number to a feed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable menu number, 1..=8. `0` is reserved as the quit sentinel
    /// and never appears in the table.
    pub id: u8,
    /// Display name shown in the menu.
    pub name: &'static str,
    /// Absolute HTTPS URL of the category's RSS feed.
    pub url: &'static str,
}

/// All categories, in menu order.
pub const CATEGORIES: [Category; 8] = [
    Category {
        id: 1,
        name: "Prima Pagina",
        url: "https://www.adnkronos.com/RSS_PrimaPagina.xml",
    },
    Category {
        id: 2,
        name: "Ultim'ora",
        url: "https://www.adnkronos.com/RSS_Ultimora.xml",
    },
    Category {
        id: 3,
        name: "Politica",
        url: "https://www.adnkronos.com/RSS_Politica.xml",
    },
    Category {
        id: 4,
        name: "Esteri",
        url: "https://www.adnkronos.com/RSS_Esteri.xml",
    },
    Category {
        id: 5,
        name: "Cronaca",
        url: "https://www.adnkronos.com/RSS_Cronaca.xml",
    },
    Category {
        id: 6,
        name: "Economia",
        url: "https://www.adnkronos.com/RSS_Economia.xml",
    },
    Category {
        id: 7,
        name: "Finanza",
        url: "https://www.adnkronos.com/RSS_Finanza.xml",
    },
    Category {
        id: 8,
        name: "Sport",
        url: "https://www.adnkronos.com/RSS_Sport.xml",
    },
];

/// Looks up a category by menu number.
///
/// Returns `None` for any id outside the table, including `0`.
pub fn find(id: u8) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_resolve() {
        let prima = find(1).unwrap();
        assert_eq!(prima.name, "Prima Pagina");
        assert!(!prima.url.is_empty());

        let politica = find(3).unwrap();
        assert_eq!(politica.name, "Politica");
        assert!(!politica.url.is_empty());
    }

    #[test]
    fn test_out_of_range_ids_do_not_resolve() {
        assert!(find(0).is_none());
        assert!(find(9).is_none());
        assert!(find(10).is_none());
        assert!(find(u8::MAX).is_none());
    }

    #[test]
    fn test_table_is_in_menu_order() {
        let ids: Vec<u8> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_all_urls_are_absolute_https() {
        for category in &CATEGORIES {
            assert!(
                category.url.starts_with("https://www.adnkronos.com/"),
                "unexpected feed URL: {}",
                category.url
            );
        }
    }
}
