pub mod user;

/*
 The Users table is owned by the review app itself: the mobile client creates
 the database file and writes the rows. This service only ever reads them, so
 the entity set stays read-only here and carries no relations.
 */
