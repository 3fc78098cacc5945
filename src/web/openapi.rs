//! OpenAPI document for the share API.

use utoipa::OpenApi;

use crate::network::NetworkAddress;
use crate::share::{LatestSnapshot, SharedFile, SharedText};
use crate::web::dto::{
    FileEntryResponse, NetworkInfoResponse, SendTextRequest, TextShareResponse, UploadResponse,
};
use crate::web::error::ErrorBody;
use crate::web::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "lanshare API",
        description = "Share files and text with devices on the local network"
    ),
    paths(
        handlers::share::upload_file,
        handlers::share::send_text,
        handlers::share::get_latest,
        handlers::file::download_file,
        handlers::file::list_files,
        handlers::network::network_info,
    ),
    components(schemas(
        UploadResponse,
        SendTextRequest,
        TextShareResponse,
        LatestSnapshot,
        SharedFile,
        SharedText,
        FileEntryResponse,
        NetworkInfoResponse,
        NetworkAddress,
        ErrorBody,
    )),
    tags(
        (name = "share", description = "Upload files and share text"),
        (name = "files", description = "Browse and download uploaded files"),
        (name = "network", description = "Host network discovery")
    )
)]
pub struct ApiDoc;
