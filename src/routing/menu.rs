//! Navigation menu filtering.
//!
//! Items with no visibility flag are always shown. Flagged items are shown
//! when public or when the visitor is authenticated; children follow the
//! same rule.

use crate::config::MenuItem;

fn visible(item: &MenuItem, authenticated: bool) -> bool {
    item.public.map_or(true, |public| public || authenticated)
}

/// Main navigation filtered for the visitor.
pub fn filtered_main_menu(items: &[MenuItem], authenticated: bool) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| visible(item, authenticated))
        .map(|item| MenuItem {
            children: item
                .children
                .iter()
                .filter(|child| visible(child, authenticated))
                .cloned()
                .collect(),
            ..item.clone()
        })
        .collect()
}

/// User menu (header, right side). Empty for anonymous visitors.
pub fn filtered_user_menu(items: &[MenuItem], authenticated: bool) -> Vec<MenuItem> {
    if authenticated {
        items.to_vec()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenusConfig;

    fn keys(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.key.as_str()).collect()
    }

    #[test]
    fn test_anonymous_main_menu() {
        let menus = MenusConfig::default();
        let menu = filtered_main_menu(&menus.main, false);

        assert_eq!(keys(&menu), vec!["home", "features", "about", "contact"]);
        let features = &menu[1];
        assert_eq!(keys(&features.children), vec!["features-browse"]);
    }

    #[test]
    fn test_authenticated_main_menu() {
        let menus = MenusConfig::default();
        let menu = filtered_main_menu(&menus.main, true);

        assert_eq!(menu.len(), menus.main.len());
        assert_eq!(menu[1].children.len(), 3);
    }

    #[test]
    fn test_unflagged_items_always_visible() {
        let items = vec![MenuItem::link("docs", "Docs", "/docs")];
        assert_eq!(filtered_main_menu(&items, false), items);
    }

    #[test]
    fn test_user_menu() {
        let menus = MenusConfig::default();

        assert!(filtered_user_menu(&menus.user, false).is_empty());
        assert_eq!(filtered_user_menu(&menus.user, true), menus.user);
    }
}
