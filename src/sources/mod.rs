pub mod nominatim;
pub mod sems;
pub mod traits;

pub use nominatim::NominatimGeocoder;
pub use sems::SemsClient;
pub use traits::Geocoder;
