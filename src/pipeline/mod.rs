pub mod dataset;
pub mod extraction;
pub mod inference; // model boundary: trait, codec, forest artifact
pub mod ingest; // batch runner: report blobs in, dataset CSV out
