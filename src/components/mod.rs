pub mod app_header;
pub mod location_panel;
pub mod marine_panel;
pub mod readout;
pub mod search_box;
pub mod skeleton;
pub mod surf_view;
pub mod weather_panel;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use app_header::{AppHeader, HEADER_HEIGHT};
pub use location_panel::{LocationPanel, LocationPanelProps};
pub use marine_panel::{MarinePanel, MarinePanelProps, MARINE_UNAVAILABLE};
pub use search_box::{SearchBox, SearchBoxProps, SEARCH_PLACEHOLDER};
pub use surf_view::{SurfView, SurfViewProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};
