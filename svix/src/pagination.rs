//! Cursor-driven iteration over list operations.

use std::future::Future;

use crate::error::Result;
use crate::models::ListResponse;

/// Collects every page of a list operation.
///
/// `fetch` is called with `None` first, then with the `iterator` of each
/// page, until a page reports `done`. A page that is not `done` but has no
/// iterator also ends the walk. The first error is returned as is.
///
/// ## Examples
///
/// ```rust,ignore
/// use svix::api::ApplicationListOptions;
/// use svix::pagination::paginate;
///
/// let apps = paginate(|iterator| {
///     svix.application().list(ApplicationListOptions {
///         iterator,
///         ..Default::default()
///     })
/// })
/// .await?;
/// ```
pub async fn paginate<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListResponse<T>>>,
{
    let mut items = Vec::new();
    let mut iterator = None;
    loop {
        let page = fetch(iterator.take()).await?;
        items.extend(page.data);
        match (page.done, page.iterator) {
            (false, Some(next)) => iterator = Some(next),
            _ => return Ok(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{HttpError, SvixError};
    use std::cell::RefCell;

    fn page(data: Vec<u32>, done: bool, iterator: Option<&str>) -> ListResponse<u32> {
        ListResponse {
            data,
            done,
            iterator: iterator.map(str::to_string),
            prev_iterator: None,
        }
    }

    #[tokio::test]
    async fn test_walks_until_done() {
        let seen = RefCell::new(Vec::new());
        let items = paginate(|iterator| {
            seen.borrow_mut().push(iterator.clone());
            async move {
                Ok::<_, SvixError>(match iterator.as_deref() {
                    None => page(vec![1, 2], false, Some("it_1")),
                    Some("it_1") => page(vec![3], true, Some("it_2")),
                    Some(other) => panic!("unexpected iterator {other}"),
                })
            }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(*seen.borrow(), vec![None, Some("it_1".to_string())]);
    }

    #[tokio::test]
    async fn test_stops_without_iterator() {
        let mut calls = 0;
        let items = paginate(|_| {
            calls += 1;
            async { Ok::<_, SvixError>(page(vec![7], false, None)) }
        })
        .await
        .unwrap();
        assert_eq!(items, vec![7]);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_error_is_returned() {
        let result = paginate(|_| async {
            Err::<ListResponse<u32>, _>(SvixError::Http(HttpError::from_response(
                500,
                String::new(),
            )))
        })
        .await;
        assert_eq!(result.unwrap_err().status(), Some(500));
    }
}
