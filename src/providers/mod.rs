pub mod historical;
pub mod stored;

// Re-export the provider variants for cleaner imports
pub use historical::HistoricalAssetAwareRatesProvider;
pub use stored::StoredRatesProvider;
