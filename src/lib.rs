//! # Folio
//!
//! A terminal client for the Me-API personal portfolio service.
//!
//! Folio renders the four regions of a portfolio page — profile, top
//! skills, paginated projects, and live search — from a remote HTTP API,
//! the same way the browser front end does: each region loads
//! independently, failures stay inside their own region, and search input
//! is debounced before it reaches the network.
//!
//! ## Quick Start
//!
//! ```bash
//! folio page                        # load and print every region
//! folio projects --skill rust       # filtered, paginated project cards
//! folio search "weather"            # one-shot search
//! folio search --follow             # debounced search over stdin
//! folio health                      # connectivity check
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration (base URL, key, paging, debounce) |
//! | [`models`] | API data types |
//! | [`error`] | API error taxonomy |
//! | [`api`] | The [`api::PortfolioApi`] seam and reqwest client |
//! | [`render`] | HTML fragment rendering per region |
//! | [`page`] | Surfaces, regions, and the concurrent startup flow |
//! | [`projects`] | Paginated projects pane |
//! | [`search`] | Debounced search with stale-response discard |

pub mod api;
pub mod config;
pub mod error;
pub mod health_cmd;
pub mod models;
pub mod page;
pub mod profile_cmd;
pub mod projects;
pub mod render;
pub mod search;
pub mod skills_cmd;
