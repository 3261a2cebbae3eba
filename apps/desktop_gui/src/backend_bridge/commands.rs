//! Backend commands queued from UI to backend worker.

use shared::protocol::GeneratePdfRequest;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    Generate { request: GeneratePdfRequest },
}
