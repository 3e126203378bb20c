// one binary for the whole suite; linking is the slow part
mod admin_export;
mod contact;
mod health_check;
mod helpers;
mod landing;
mod login;
mod newsletter;
