mod property_roundtrip;
mod utils;
