//! Wire types shared between the invoice front-end and the extraction service.

pub mod usecases;
