pub mod alert_banner;
pub mod avatar;
pub mod loading_indicator;

pub use alert_banner::*;
pub use avatar::*;
pub use loading_indicator::*;
