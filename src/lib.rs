//! Content service backing a secondary school's public website: news,
//! announcements, achievements, events, organizations, school statistics,
//! a contact form, and a subscriber mailing list notified by email when
//! news, announcements, or events are published.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod notify;
pub mod repository;
pub mod service;
pub mod uploads;
