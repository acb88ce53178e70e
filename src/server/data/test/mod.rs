mod participant;
mod tag;
mod user;
