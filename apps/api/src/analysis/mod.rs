// Analysis workflow: parse an uploaded resume, store it, score it against
// job descriptions. `service` holds the store-facing pipeline, `handlers`
// the HTTP surface.

pub mod handlers;
pub mod service;
