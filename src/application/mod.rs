// Application layer - Use cases and the ports they depend on
pub mod dashboard_publisher;
pub mod dashboard_transport;
pub mod panel_builder;
