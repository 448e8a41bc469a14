mod drawer;
mod orders;
