use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::display::Avatar;
use crate::features::boundary::ROOT_ROUTE;
use crate::features::navbar::{
    avatar_initial, display_email, display_name, is_active, link_items, link_key, MenuEffect, MenuEvent,
    MenuState, NavbarComponent,
};
use crate::utils::platform::ScrollListener;

const ACCESS_PORTAL_LABEL: &str = "Access Portal";

#[derive(Props, PartialEq, Clone)]
pub struct NavbarViewProps {
    pub navbar: NavbarComponent,
    /// Current path, used for active-link highlighting.
    pub location: String,
}

#[component]
pub fn NavbarView(props: NavbarViewProps) -> Element {
    let config = props.navbar.config().clone();
    let mut menu = use_signal(MenuState::default);

    // Closes the menu on page scroll; detached when the navbar unmounts.
    use_hook(move || {
        ScrollListener::attach(move || {
            if menu.peek().is_open() {
                menu.write().handle(MenuEvent::Scrolled, "");
            }
        })
        .map(Rc::new)
    });

    let authenticated = config.session.is_authenticated();
    let user = config.session.user();
    let links = link_items(&config.navigation, authenticated);
    let initial = avatar_initial(user.as_ref());
    let name = display_name(user.as_ref());
    let email = display_email(user.as_ref());
    let gradient = config.gradient.to_css();

    let dispatch_menu = {
        let config = config.clone();
        move |event: MenuEvent| {
            let mut menu = menu;
            let effect = menu.write().handle(event, &config.settings_route);
            match effect {
                Some(MenuEffect::Navigate(route)) => config.navigator.navigate(&route),
                Some(MenuEffect::SignOut) => {
                    config.session.logout();
                    config.navigator.navigate(ROOT_ROUTE);
                }
                None => {}
            }
        }
    };
    let dispatch_menu = Rc::new(dispatch_menu);

    let brand_navigator = config.navigator.clone();
    let portal_navigator = config.navigator.clone();
    let auth_route = config.auth_route.clone();

    rsx! {
        nav {
            class: "fb-navbar",
            style: "background: {gradient};",
            div {
                class: "fb-navbar-inner",

                button {
                    class: "fb-navbar-brand",
                    onclick: move |_| brand_navigator.navigate(ROOT_ROUTE),
                    img { class: "fb-navbar-logo", src: "{config.brand.logo}", alt: "{config.brand.name}" }
                    span { class: "fb-navbar-name", "{config.brand.name}" }
                }

                div {
                    class: "fb-navbar-links",
                    for (index, item) in links.into_iter().enumerate() {
                        NavLink {
                            key: "{link_key(index, &item.id)}",
                            active: is_active(config.is_active.as_ref(), &item.id, &props.location),
                            label: item.label.clone(),
                            icon: item.icon.clone(),
                            on_select: {
                                let navigator = config.navigator.clone();
                                let route = item.id.clone();
                                move |_| navigator.navigate(&route)
                            },
                        }
                    }
                }

                div {
                    class: "fb-navbar-account",
                    if authenticated {
                        Avatar {
                            initial: initial.clone(),
                            size: 36,
                            onclick: {
                                let dispatch_menu = dispatch_menu.clone();
                                move |_| dispatch_menu(MenuEvent::AvatarClicked)
                            },
                        }
                        if menu().is_open() {
                            div {
                                class: "fb-menu-scrim",
                                onclick: {
                                    let dispatch_menu = dispatch_menu.clone();
                                    move |_| dispatch_menu(MenuEvent::Dismiss)
                                },
                            }
                            div {
                                class: "fb-menu",
                                role: "menu",
                                div {
                                    class: "fb-menu-header",
                                    Avatar { initial: initial.clone(), size: 40 }
                                    div {
                                        class: "fb-menu-identity",
                                        span { class: "fb-menu-name", "{name}" }
                                        span { class: "fb-menu-email", "{email}" }
                                        span { class: "fb-chip", "{config.role_label}" }
                                    }
                                }
                                button {
                                    class: "fb-menu-item",
                                    role: "menuitem",
                                    onclick: {
                                        let dispatch_menu = dispatch_menu.clone();
                                        move |_| dispatch_menu(MenuEvent::SettingsSelected)
                                    },
                                    "⚙️ Settings"
                                }
                                button {
                                    class: "fb-menu-item",
                                    role: "menuitem",
                                    onclick: {
                                        let dispatch_menu = dispatch_menu.clone();
                                        move |_| dispatch_menu(MenuEvent::SignOutSelected)
                                    },
                                    "🚪 Sign Out"
                                }
                            }
                        }
                    } else {
                        button {
                            class: "fb-button fb-navbar-cta",
                            onclick: move |_| portal_navigator.navigate(&auth_route),
                            "{ACCESS_PORTAL_LABEL}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct NavLinkProps {
    active: bool,
    label: String,
    #[props(default)]
    icon: Option<String>,
    on_select: EventHandler<()>,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    rsx! {
        button {
            class: if props.active { "fb-navbar-link active" } else { "fb-navbar-link" },
            onclick: move |_| props.on_select.call(()),
            if let Some(icon) = props.icon.as_ref() {
                span { class: "fb-navbar-link-icon", "{icon}" }
            }
            "{props.label}"
        }
    }
}
