use actix_web::{
    HttpRequest, HttpResponse, Responder,
    body::BoxBody,
    http::{
        StatusCode,
        header::{ContentDisposition, DispositionParam, DispositionType},
    },
};
use reports::ReportFormat;
use serde::Serialize;

#[derive(Debug)]
pub struct Response<T> {
    pub body: T,
    status: StatusCode,
}

impl<T> Response<T> {
    pub fn new(body: T) -> Self {
        Response {
            body,
            status: StatusCode::OK,
        }
    }

    pub fn created(body: T) -> Self {
        Response {
            body,
            status: StatusCode::CREATED,
        }
    }
}

impl<T> Responder for Response<T>
where
    T: Serialize,
{
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(self.status).json(self.body)
    }
}

/// A rendered report sent as a file download.
#[derive(Debug)]
pub struct FileResponse {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub format: ReportFormat,
}

impl Responder for FileResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok()
            .content_type(self.format.content_type())
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(self.filename)],
            })
            .body(self.bytes)
    }
}
