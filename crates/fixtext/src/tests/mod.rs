mod split_join;
mod text;
