/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Framework agnostic HTTP primitives shared by every generated client:
//! the request body type, the per-operation request/response envelope, the
//! response parsing strategies and the middleware interface.

pub mod body;
pub mod middleware;
pub mod operation;
pub mod property_bag;
pub mod response;
pub mod result;
pub mod retry;
