//! Cosmos Block Indexer Library
//!
//! A modular Cosmos SDK block indexer following hexagonal architecture:
//!
//! - `domain`: Core models (raw blocks, decoded messages, block/tx documents)
//! - `application`: Use cases (block pipeline, tx parser, sync runner), ports and error types
//! - `adapters`: Implementations (Tendermint RPC and fixture sources, protobuf decoder, module handlers, sinks)
//! - `infrastructure`: Cross-cutting concerns (configuration, telemetry)

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
