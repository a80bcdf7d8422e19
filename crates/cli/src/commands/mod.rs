pub(crate) mod movies;
pub(crate) mod serve;
