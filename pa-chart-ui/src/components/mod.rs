//! Reusable Dioxus RSX components for the presence chart apps.

mod avatar_panel;
mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod no_data_notice;
mod presence_view;
mod user_selector;

pub use avatar_panel::AvatarPanel;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use no_data_notice::NoDataNotice;
pub use presence_view::PresenceView;
pub use user_selector::UserSelector;
