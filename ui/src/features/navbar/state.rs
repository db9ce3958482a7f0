use super::config::{ActivePredicate, NavigationConfig, NavigationItem};
use crate::services::session::UserProfile;

pub const AVATAR_FALLBACK: &str = "U";
pub const SIGNED_OUT_NAME: &str = "User";
pub const EMAIL_FALLBACK: &str = "user@example.com";

/// Public items, then authenticated ones when signed in. Duplicates are kept.
pub fn visible_items(navigation: &NavigationConfig, authenticated: bool) -> Vec<NavigationItem> {
    let mut items = navigation.public.clone();
    if authenticated {
        items.extend(navigation.authenticated.iter().cloned());
    }
    items
}

/// The first visible item is the brand link; the row shows the rest.
pub fn link_items(navigation: &NavigationConfig, authenticated: bool) -> Vec<NavigationItem> {
    visible_items(navigation, authenticated)
        .into_iter()
        .skip(1)
        .collect()
}

/// Render key for a link row entry. Ids may repeat across the public and
/// authenticated lists, so the position is part of the key.
pub fn link_key(index: usize, id: &str) -> String {
    format!("{index}-{id}")
}

pub fn avatar_initial(user: Option<&UserProfile>) -> String {
    user.and_then(UserProfile::initial)
        .unwrap_or_else(|| AVATAR_FALLBACK.to_string())
}

pub fn display_name(user: Option<&UserProfile>) -> String {
    user.map(UserProfile::full_name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| SIGNED_OUT_NAME.to_string())
}

pub fn display_email(user: Option<&UserProfile>) -> String {
    user.and_then(|u| u.email.clone())
        .filter(|email| !email.is_empty())
        .unwrap_or_else(|| EMAIL_FALLBACK.to_string())
}

pub fn is_active(predicate: Option<&ActivePredicate>, item_id: &str, current_path: &str) -> bool {
    match predicate {
        Some(predicate) => (predicate)(item_id, current_path),
        None => item_id == current_path,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    AvatarClicked,
    Dismiss,
    Scrolled,
    SettingsSelected,
    SignOutSelected,
}

/// Side effect the host component performs after a menu transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEffect {
    Navigate(String),
    /// Call logout, then navigate to the root route.
    SignOut,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn handle(&mut self, event: MenuEvent, settings_route: &str) -> Option<MenuEffect> {
        match event {
            MenuEvent::AvatarClicked => {
                *self = MenuState::Open;
                None
            }
            MenuEvent::Dismiss | MenuEvent::Scrolled => {
                *self = MenuState::Closed;
                None
            }
            MenuEvent::SettingsSelected => {
                *self = MenuState::Closed;
                Some(MenuEffect::Navigate(settings_route.to_string()))
            }
            MenuEvent::SignOutSelected => {
                *self = MenuState::Closed;
                Some(MenuEffect::SignOut)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::injected::Injected;
    use std::rc::Rc;

    fn navigation() -> NavigationConfig {
        NavigationConfig {
            public: vec![
                NavigationItem::new("/", "Home"),
                NavigationItem::new("/pricing", "Pricing"),
            ],
            authenticated: vec![
                NavigationItem::new("/projects", "Projects"),
                NavigationItem::new("/pricing", "Pricing"),
            ],
        }
    }

    fn ids(items: &[NavigationItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_visible_items_public_first_without_dedup() {
        assert_eq!(ids(&visible_items(&navigation(), false)), vec!["/", "/pricing"]);
        assert_eq!(
            ids(&visible_items(&navigation(), true)),
            vec!["/", "/pricing", "/projects", "/pricing"]
        );
    }

    #[test]
    fn test_link_row_drops_brand_item() {
        assert_eq!(ids(&link_items(&navigation(), false)), vec!["/pricing"]);
        assert!(link_items(&NavigationConfig::default(), true).is_empty());
    }

    #[test]
    fn test_repeated_ids_get_distinct_keys() {
        let keys: Vec<String> = link_items(&navigation(), true)
            .iter()
            .enumerate()
            .map(|(index, item)| link_key(index, &item.id))
            .collect();

        assert_eq!(keys, vec!["0-/pricing", "1-/projects", "2-/pricing"]);
    }

    #[test]
    fn test_user_display_fallbacks() {
        assert_eq!(avatar_initial(None), "U");
        assert_eq!(display_name(None), "User");
        assert_eq!(display_email(None), "user@example.com");

        let user = UserProfile {
            first_name: Some("grace".to_string()),
            last_name: Some("Hopper".to_string()),
            email: Some("grace@navy.mil".to_string()),
        };
        assert_eq!(avatar_initial(Some(&user)), "G");
        assert_eq!(display_name(Some(&user)), "grace Hopper");
        assert_eq!(display_email(Some(&user)), "grace@navy.mil");

        assert_eq!(avatar_initial(Some(&UserProfile::default())), "U");
        assert_eq!(display_name(Some(&UserProfile::default())), "User");
    }

    #[test]
    fn test_active_check_defaults_to_exact_match() {
        assert!(is_active(None, "/projects", "/projects"));
        assert!(!is_active(None, "/projects", "/projects/42"));

        let prefix: ActivePredicate = Injected::new(Rc::new(|id: &str, path: &str| {
            path.starts_with(id)
        }) as Rc<dyn Fn(&str, &str) -> bool>);
        assert!(is_active(Some(&prefix), "/projects", "/projects/42"));
    }

    #[test]
    fn test_menu_transitions() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());

        assert_eq!(menu.handle(MenuEvent::AvatarClicked, "/settings"), None);
        assert!(menu.is_open());

        assert_eq!(menu.handle(MenuEvent::Scrolled, "/settings"), None);
        assert_eq!(menu, MenuState::Closed);

        menu.handle(MenuEvent::AvatarClicked, "/settings");
        assert_eq!(
            menu.handle(MenuEvent::SettingsSelected, "/settings"),
            Some(MenuEffect::Navigate("/settings".to_string()))
        );
        assert_eq!(menu, MenuState::Closed);

        menu.handle(MenuEvent::AvatarClicked, "/settings");
        assert_eq!(
            menu.handle(MenuEvent::SignOutSelected, "/settings"),
            Some(MenuEffect::SignOut)
        );
        assert_eq!(menu, MenuState::Closed);

        menu.handle(MenuEvent::AvatarClicked, "/settings");
        menu.handle(MenuEvent::Dismiss, "/settings");
        assert!(!menu.is_open());
    }
}
