use anyhow::{anyhow, Context};
use dioxus::prelude::*;
use serde::Deserialize;
use std::rc::Rc;

use frontblok_ui::components::shared::ErrorBoundary;
use frontblok_ui::features::navbar::{
    BrandConfig, NavigationConfig, NavigationItem, NavbarComponent,
};
use frontblok_ui::services::api::{AuthApi, AuthApiHandle};
use frontblok_ui::services::client::{ClientSession, HttpAuthClient};
use frontblok_ui::services::identity::IdentityHandle;
use frontblok_ui::services::navigation::{Navigator, NavigatorHandle};
use frontblok_ui::services::session::{AuthSession, AuthSessionHandle, SessionHandle, SessionState};
use frontblok_ui::theme::{create_theme, default_navbar_gradient, ThemeOverrides, ThemeProvider};
use frontblok_ui::utils::platform;
use frontblok_ui::{
    console_error, create_navbar, AuthView, Branding, BrandingMessages, ForgotPasswordView,
    Injected, NavbarConfig, ResetPasswordView, SettingsView, SupportView, UiConfig,
    VerifyEmailView,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const APP_CONFIG: &str = include_str!("../config/app.json");
const LOGO: Asset = asset!("/assets/logo.svg");

fn main() {
    dioxus::launch(App);
}

/// Embedded deployment settings.
#[derive(Deserialize, Clone, PartialEq)]
struct AppConfig {
    #[serde(default)]
    ui: UiConfig,
    branding: Branding,
    #[serde(default)]
    google_client_id: Option<String>,
}

fn load_config() -> anyhow::Result<AppConfig> {
    let config: AppConfig =
        serde_json::from_str(APP_CONFIG).context("failed to parse embedded app config")?;
    config
        .ui
        .validate()
        .map_err(|errors| anyhow!("invalid app config: {}", errors.join("; ")))?;
    Ok(config)
}

/// Capabilities shared with every routed page.
#[derive(Clone)]
struct AppServices {
    config: AppConfig,
    session: SessionHandle,
    auth_session: AuthSessionHandle,
    api: AuthApiHandle,
    identity: Option<IdentityHandle>,
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        load_config().unwrap_or_else(|e| {
            console_error!(format!("[App] {e:#}"));
            fallback_config()
        })
    });

    use_context_provider({
        let config = config.clone();
        move || build_services(config)
    });

    let theme = create_theme(ThemeOverrides::default());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ThemeProvider {
            theme,
            ErrorBoundary {
                support_email: config.ui.support_email.clone(),
                environment: config.ui.environment,
                Router::<Route> {}
            }
        }
    }
}

fn fallback_config() -> AppConfig {
    AppConfig {
        ui: UiConfig::default(),
        branding: Branding {
            app_name: "Frontblok".to_string(),
            tagline: String::new(),
            logo_letter: "F".to_string(),
            primary_gradient: default_navbar_gradient().to_css(),
            primary_gradient_hover: default_navbar_gradient().to_css(),
            logo_shadow: "none".to_string(),
            dashboard_route: "/projects".to_string(),
            messages: BrandingMessages {
                login_success: "Welcome back!".to_string(),
                register_success: "Account created!".to_string(),
                google_new_user: "Welcome! Your account is ready.".to_string(),
            },
            security_badge: "Secure sign-in".to_string(),
        },
        google_client_id: None,
    }
}

fn build_services(config: AppConfig) -> AppServices {
    let client = Rc::new(HttpAuthClient::new(config.ui.api.clone()));
    let session = Rc::new(ClientSession::new(client.clone()));

    spawn({
        let session = session.clone();
        async move { session.refresh_profile().await }
    });

    AppServices {
        identity: identity_provider(config.google_client_id.as_deref()),
        session: Injected::new(session.clone() as Rc<dyn SessionState>),
        auth_session: Injected::new(session as Rc<dyn AuthSession>),
        api: Injected::new(client as Rc<dyn AuthApi>),
        config,
    }
}

#[cfg(target_arch = "wasm32")]
fn identity_provider(client_id: Option<&str>) -> Option<IdentityHandle> {
    use frontblok_ui::console_info;
    use frontblok_ui::services::identity::{GoogleIdentity, IdentityProvider};

    let client_id = client_id.filter(|id| !id.is_empty())?;
    console_info!("[App] Google sign-in enabled");
    Some(Injected::new(
        Rc::new(GoogleIdentity::new(client_id)) as Rc<dyn IdentityProvider>
    ))
}

#[cfg(not(target_arch = "wasm32"))]
fn identity_provider(_client_id: Option<&str>) -> Option<IdentityHandle> {
    None
}

/// Routes through the Dioxus router. Query parameters come from the
/// browser location, which the router keeps in sync.
#[derive(Clone, Copy)]
struct RouterNavigator {
    navigator: dioxus::router::prelude::Navigator,
    router: RouterContext,
}

impl RouterNavigator {
    /// Must be called from a component rendered under the router.
    fn current() -> Self {
        Self {
            navigator: navigator(),
            router: router(),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, route: &str) {
        self.navigator.push(route);
    }

    fn current_path(&self) -> String {
        let full = self.router.full_route_string();
        match full.split_once('?') {
            Some((path, _)) => path.to_string(),
            None => full,
        }
    }

    fn query_param(&self, key: &str) -> Option<String> {
        platform::query_param(key)
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/auth")]
        Auth {},
        #[route("/forgot-password")]
        ForgotPassword {},
        #[route("/reset-password?:token")]
        ResetPassword { token: String },
        #[route("/verify-email?:token")]
        VerifyEmail { token: String },
        #[route("/settings")]
        Settings {},
        #[route("/support")]
        Support {},
        #[route("/projects")]
        Projects {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Per-router handles, created once under the router context.
#[derive(Clone)]
struct RoutedServices {
    navigator: NavigatorHandle,
    navbar: NavbarComponent,
}

fn navigation() -> NavigationConfig {
    NavigationConfig {
        public: vec![
            NavigationItem::new("/", "Home"),
            NavigationItem::new("/support", "Support").with_icon("💬"),
        ],
        authenticated: vec![
            NavigationItem::new("/projects", "Projects").with_icon("📁"),
            NavigationItem::new("/settings", "Settings").with_icon("⚙️"),
        ],
    }
}

#[component]
fn Shell() -> Element {
    let services = use_context::<AppServices>();
    // Re-render the navbar on every route change.
    let _route = use_route::<Route>();

    let routed = use_context_provider(|| {
        let navigator: NavigatorHandle =
            Injected::new(Rc::new(RouterNavigator::current()) as Rc<dyn Navigator>);
        let routes = &services.config.ui.routes;
        let navbar = create_navbar(
            NavbarConfig::new(
                BrandConfig {
                    name: services.config.branding.app_name.clone(),
                    logo: LOGO.to_string(),
                },
                navigation(),
                services.session.clone(),
                navigator.clone(),
                default_navbar_gradient(),
            )
            .with_auth_route(routes.auth.clone())
            .with_settings_route(routes.settings.clone()),
        );
        RoutedServices { navigator, navbar }
    });

    rsx! {
        {routed.navbar.render()}
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    let services = use_context::<AppServices>();
    let branding = &services.config.branding;

    rsx! {
        section {
            class: "app-hero",
            h1 { "{branding.app_name}" }
            p { "{branding.tagline}" }
            Link { class: "fb-button fb-button-primary", to: Route::Auth {}, "Get Started" }
        }
    }
}

#[component]
fn Auth() -> Element {
    let services = use_context::<AppServices>();
    let routed = use_context::<RoutedServices>();

    rsx! {
        AuthView {
            branding: services.config.branding.clone(),
            session: services.auth_session.clone(),
            api: services.api.clone(),
            navigator: routed.navigator.clone(),
            identity: services.identity.clone(),
            timings: services.config.ui.timings.clone(),
            forgot_password_route: services.config.ui.routes.forgot_password.clone(),
        }
    }
}

#[component]
fn ForgotPassword() -> Element {
    let services = use_context::<AppServices>();
    let routed = use_context::<RoutedServices>();

    rsx! {
        ForgotPasswordView {
            api: services.api.clone(),
            navigator: routed.navigator.clone(),
            auth_route: services.config.ui.routes.auth.clone(),
            reset_route: services.config.ui.routes.reset_password.clone(),
            environment: services.config.ui.environment,
        }
    }
}

#[component]
fn ResetPassword(token: String) -> Element {
    let services = use_context::<AppServices>();
    let routed = use_context::<RoutedServices>();

    rsx! {
        ResetPasswordView {
            api: services.api.clone(),
            navigator: routed.navigator.clone(),
            token: Some(token).filter(|t| !t.is_empty()),
            auth_route: services.config.ui.routes.auth.clone(),
        }
    }
}

#[component]
fn VerifyEmail(token: String) -> Element {
    let services = use_context::<AppServices>();
    let routed = use_context::<RoutedServices>();

    rsx! {
        VerifyEmailView {
            api: services.api.clone(),
            navigator: routed.navigator.clone(),
            token: Some(token).filter(|t| !t.is_empty()),
            success_route: services.config.ui.routes.verify_success.clone(),
            error_route: services.config.ui.routes.verify_error.clone(),
        }
    }
}

#[component]
fn Settings() -> Element {
    let services = use_context::<AppServices>();
    let routed = use_context::<RoutedServices>();

    rsx! {
        SettingsView {
            session: services.session.clone(),
            api: services.api.clone(),
            navigator: routed.navigator.clone(),
            home_route: services.config.ui.routes.home.clone(),
            section {
                class: "fb-card fb-settings-section",
                h2 { "Notifications" }
                p { class: "fb-muted", "Email notifications are sent to your account address." }
            }
        }
    }
}

#[component]
fn Support() -> Element {
    let services = use_context::<AppServices>();

    rsx! {
        SupportView { reset_delay_ms: services.config.ui.timings.support_reset_ms }
    }
}

#[component]
fn Projects() -> Element {
    let services = use_context::<AppServices>();
    let name = services
        .session
        .user()
        .map(|u| u.full_name())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "there".to_string());

    rsx! {
        section {
            class: "app-page",
            h1 { "Projects" }
            p { "Hi {name}, you have no projects yet." }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        section {
            class: "app-page",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back home" }
        }
    }
}
