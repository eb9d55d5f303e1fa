//! Commands reachable from the CLI. / CLI 可触达的命令。

pub mod run;
