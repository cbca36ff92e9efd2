/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// The body used for dispatching all HTTP requests and carried on loaded
/// responses.
///
/// Currently only in-memory bodies exist; the variant is an enum so that a
/// streaming variant can be added without breaking the `try_clone` contract.
#[derive(Debug)]
pub enum SdkBody {
    Once(Option<Bytes>),
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody::Once(None)
    }

    /// The data of this body, if it is already loaded in memory.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            SdkBody::Once(Some(bytes)) => Some(bytes),
            SdkBody::Once(None) => Some(&[]),
        }
    }

    /// Clone the body if it is cloneable (in-memory bodies always are).
    pub fn try_clone(&self) -> Option<SdkBody> {
        match self {
            SdkBody::Once(bytes) => Some(SdkBody::Once(bytes.clone())),
        }
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match self {
            SdkBody::Once(ref mut opt) => {
                let data = opt.take();
                match data {
                    Some(bytes) => Poll::Ready(Some(Ok(bytes))),
                    None => Poll::Ready(None),
                }
            }
        }
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::Once(Some(Bytes::copy_from_slice(s.as_bytes())))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::Once(Some(Bytes::from(s)))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody::Once(Some(bytes))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self.bytes() {
            Some(bytes) => http_body::SizeHint::with_exact(bytes.len() as u64),
            None => http_body::SizeHint::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;

    #[test]
    fn clone_preserves_data() {
        let body = SdkBody::from("hello world");
        let cloned = body.try_clone().expect("in-memory bodies are cloneable");
        assert_eq!(cloned.bytes(), Some("hello world".as_bytes()));
    }

    #[test]
    fn empty_body_reads_as_empty() {
        assert_eq!(SdkBody::empty().bytes(), Some(&[][..]));
    }
}
