// Adapters layer: concrete implementations of domain ports for external systems.

pub mod nominatim;

pub use nominatim::NominatimClient;
