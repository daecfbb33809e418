mod dataset_codec;

pub use dataset_codec::{decode_mapping, encode_mapping};
