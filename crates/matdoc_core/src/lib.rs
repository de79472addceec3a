//! Public library API for decoding MATLAB Level-5 `.mat` files.

/// Header parsing, element stream decoding, matrix decoding, and variable lookup.
pub mod mat;
