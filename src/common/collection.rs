//! Fetching every member of a collection without letting one bad member sink
//! the rest.

use std::collections::{BTreeMap, HashSet};
use std::thread;

use serde::Deserialize;
use thiserror::Error;

use crate::error::Error;
use crate::interfaces::RemoteClient;

use super::decode::nullable;
use super::entity::{Entity, Resource};
use super::types::Link;

#[derive(Debug, Deserialize)]
struct CollectionDocument {
    #[serde(rename = "Members", default, deserialize_with = "nullable")]
    members: Vec<Link>,
    #[serde(rename = "Members@odata.nextLink", default)]
    next_link: Option<String>,
}

/// Per-member failures of a collection fetch, keyed by member URI
#[derive(Error, Debug, Default)]
#[error("{} collection member(s) could not be fetched: {}", .failures.len(), summarize(.failures))]
pub struct CollectionError {
    failures: BTreeMap<String, Error>,
}

fn summarize(failures: &BTreeMap<String, Error>) -> String {
    failures
        .iter()
        .map(|(uri, err)| format!("{uri}: {err}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl CollectionError {
    pub fn failures(&self) -> &BTreeMap<String, Error> {
        &self.failures
    }

    pub fn get(&self, uri: &str) -> Option<&Error> {
        self.failures.get(uri)
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_failures(self) -> BTreeMap<String, Error> {
        self.failures
    }
}

/// Members that decoded, in link order, plus whatever failed
#[derive(Debug)]
#[must_use = "a collection result may carry member failures"]
pub struct CollectionResult<T> {
    resources: Vec<Entity<T>>,
    error: Option<CollectionError>,
}

impl<T> CollectionResult<T> {
    fn empty() -> Self {
        CollectionResult {
            resources: Vec::new(),
            error: None,
        }
    }

    pub fn resources(&self) -> &[Entity<T>] {
        &self.resources
    }

    pub fn error(&self) -> Option<&CollectionError> {
        self.error.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Number of members that were attempted
    pub fn attempted(&self) -> usize {
        self.resources.len() + self.error.as_ref().map_or(0, CollectionError::len)
    }

    pub fn into_parts(self) -> (Vec<Entity<T>>, Option<CollectionError>) {
        (self.resources, self.error)
    }
}

/// Ordered member URIs of a collection, following `Members@odata.nextLink`.
/// A URI listed more than once is kept at its first position only.
pub fn get_collection<C: RemoteClient + ?Sized>(
    client: &C,
    uri: &str,
) -> Result<Vec<String>, Error> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();
    let mut visited = HashSet::new();
    let mut next = Some(uri.to_string());

    while let Some(page) = next.take() {
        if !visited.insert(page.clone()) {
            log::warn!("Collection {uri} links back to page {page}; stopping");
            break;
        }
        let doc: CollectionDocument = serde_json::from_slice(&client.get(&page)?)?;
        for member in doc.members {
            if member.is_empty() {
                log::warn!("Skipping member without @odata.id in collection {page}");
                continue;
            }
            if !seen.insert(member.odata_id.clone()) {
                log::warn!("Collection {page} lists {} more than once", member.odata_id);
                continue;
            }
            links.push(member.odata_id);
        }
        next = doc.next_link.filter(|n| !n.is_empty());
    }

    Ok(links)
}

pub struct CollectionFetcher<'c, C: ?Sized> {
    client: &'c C,
    workers: usize,
}

impl<'c, C: RemoteClient + ?Sized> CollectionFetcher<'c, C> {
    pub fn new(client: &'c C) -> Self {
        CollectionFetcher { client, workers: 1 }
    }

    /// Fetch members on up to `workers` threads. Result order is unaffected.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Fetch and decode every member of the collection at `uri`.
    ///
    /// An empty `uri` is an absent relationship and yields an empty result.
    /// Failing to read the collection itself is an error; failing to read a
    /// member is recorded in the result and does not stop the others.
    pub fn fetch_all<T: Resource + Send>(&self, uri: &str) -> Result<CollectionResult<T>, Error> {
        if uri.is_empty() {
            return Ok(CollectionResult::empty());
        }

        let links = get_collection(self.client, uri)?;
        log::debug!("Collection {uri} has {} member(s)", links.len());

        let mut resources = Vec::with_capacity(links.len());
        let mut failures = BTreeMap::new();
        for (link, result) in links.iter().zip(self.fetch_members::<T>(&links)) {
            match result {
                Ok(entity) => resources.push(entity),
                Err(err) => {
                    log::warn!("Could not fetch collection member {link}: {err}");
                    failures.insert(link.clone(), err);
                }
            }
        }

        let error = (!failures.is_empty()).then_some(CollectionError { failures });
        Ok(CollectionResult { resources, error })
    }

    fn fetch_members<T: Resource + Send>(&self, links: &[String]) -> Vec<Result<Entity<T>, Error>> {
        if self.workers <= 1 || links.len() <= 1 {
            return links
                .iter()
                .map(|link| Entity::fetch(self.client, link))
                .collect();
        }

        let (job_tx, job_rx) = flume::unbounded::<(usize, &str)>();
        let (result_tx, result_rx) = flume::unbounded();
        for (idx, link) in links.iter().enumerate() {
            // Receiver is alive until the end of this function
            let _ = job_tx.send((idx, link.as_str()));
        }
        drop(job_tx);

        let client = self.client;
        thread::scope(|s| {
            for _ in 0..self.workers.min(links.len()) {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                s.spawn(move || {
                    for (idx, link) in job_rx.iter() {
                        let _ = result_tx.send((idx, Entity::<T>::fetch(client, link)));
                    }
                });
            }
        });
        drop(result_tx);

        let mut results: Vec<_> = result_rx.iter().collect();
        results.sort_by_key(|(idx, _)| *idx);
        results.into_iter().map(|(_, result)| result).collect()
    }
}

/// Sequential [`CollectionFetcher::fetch_all`]
pub fn list_referenced<T, C>(client: &C, uri: &str) -> Result<CollectionResult<T>, Error>
where
    T: Resource + Send,
    C: RemoteClient + ?Sized,
{
    CollectionFetcher::new(client).fetch_all(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde::Serialize;
    use serde_json::json;

    use crate::common::decode::Schema;
    use crate::interfaces::mock::MockClient;
    use crate::interfaces::ClientError;

    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Outlet {
        #[serde(default)]
        voltage: Option<f64>,
    }

    impl Schema for Outlet {}
    impl Resource for Outlet {}

    const COLLECTION: &str = "/redfish/v1/PowerEquipment/RackPDUs/1/Outlets";

    fn outlet_uri(n: usize) -> String {
        format!("{COLLECTION}/{n}")
    }

    fn collection_of(n: usize) -> String {
        let members: Vec<_> = (0..n).map(|i| json!({"@odata.id": outlet_uri(i)})).collect();
        json!({
            "@odata.id": COLLECTION,
            "Members": members,
            "Members@odata.count": n,
        })
        .to_string()
    }

    fn client_with_outlets(n: usize, failing: &[usize]) -> MockClient {
        let mut client = MockClient::new().with_document(COLLECTION, collection_of(n));
        for i in 0..n {
            client = if failing.contains(&i) {
                client.with_status(&outlet_uri(i), 503)
            } else {
                client.with_document(
                    &outlet_uri(i),
                    json!({"@odata.id": outlet_uri(i), "Id": i.to_string(), "Voltage": 230.0})
                        .to_string(),
                )
            };
        }
        client
    }

    #[test]
    fn empty_uri_is_absent_relationship() {
        let client = MockClient::new();
        let result = list_referenced::<Outlet, _>(&client, "").unwrap();
        assert!(result.resources().is_empty());
        assert!(result.is_complete());
        assert!(client.gets().is_empty());
    }

    #[test]
    fn all_members_succeed() {
        let client = client_with_outlets(3, &[]);
        let result = list_referenced::<Outlet, _>(&client, COLLECTION).unwrap();
        assert!(result.error().is_none());
        let ids: Vec<_> = result.resources().iter().map(|o| o.id().to_string()).collect();
        assert_eq!(ids, ["0", "1", "2"]);
    }

    #[test]
    fn member_failures_are_collected() {
        let client = client_with_outlets(6, &[1, 4]);
        let (resources, error) = list_referenced::<Outlet, _>(&client, COLLECTION)
            .unwrap()
            .into_parts();

        let ids: Vec<_> = resources.iter().map(|o| o.id().to_string()).collect();
        assert_eq!(ids, ["0", "2", "3", "5"]);

        let error = error.unwrap();
        assert_eq!(error.len(), 2);
        assert!(matches!(
            error.get(&outlet_uri(1)),
            Some(Error::Transport(ClientError::Status { status: 503, .. }))
        ));
        assert!(error.get(&outlet_uri(4)).is_some());
        assert!(error.to_string().starts_with("2 collection member(s)"));
    }

    #[test]
    fn undecodable_member_is_a_failure() {
        let client = client_with_outlets(2, &[])
            .with_document(&outlet_uri(1), r#"{"Voltage": "two hundred"}"#);
        let result = list_referenced::<Outlet, _>(&client, COLLECTION).unwrap();
        assert_eq!(result.resources().len(), 1);
        assert_eq!(result.attempted(), 2);
        assert!(matches!(
            result.error().unwrap().get(&outlet_uri(1)),
            Some(Error::Decode(_))
        ));
    }

    #[test]
    fn unreadable_collection_is_an_error() {
        let client = MockClient::new().with_status(COLLECTION, 401);
        assert!(matches!(
            list_referenced::<Outlet, _>(&client, COLLECTION),
            Err(Error::Transport(ClientError::Status { status: 401, .. }))
        ));
    }

    #[test]
    fn parallel_fetch_keeps_order_and_failures() {
        let client = client_with_outlets(20, &[0, 7, 19]);
        let result = CollectionFetcher::new(&client)
            .with_workers(4)
            .fetch_all::<Outlet>(COLLECTION)
            .unwrap();

        let expected: Vec<_> = (0..20)
            .filter(|i| ![0, 7, 19].contains(i))
            .map(|i| i.to_string())
            .collect();
        let ids: Vec<_> = result.resources().iter().map(|o| o.id().to_string()).collect();
        assert_eq!(ids, expected);

        let failed: Vec<_> = result.error().unwrap().failures().keys().cloned().collect();
        let mut expected_failed = vec![outlet_uri(0), outlet_uri(7), outlet_uri(19)];
        expected_failed.sort();
        assert_eq!(failed, expected_failed);
    }

    #[test]
    fn next_link_pages_are_followed() {
        let page_2 = format!("{COLLECTION}?$skip=2");
        let client = client_with_outlets(3, &[])
            .with_document(
                COLLECTION,
                json!({
                    "Members": [{"@odata.id": outlet_uri(0)}, {"@odata.id": outlet_uri(1)}],
                    "Members@odata.nextLink": page_2,
                })
                .to_string(),
            )
            .with_document(
                &page_2,
                json!({"Members": [{"@odata.id": outlet_uri(2)}, {}]}).to_string(),
            );

        let links = get_collection(&client, COLLECTION).unwrap();
        assert_eq!(links, vec![outlet_uri(0), outlet_uri(1), outlet_uri(2)]);
    }

    #[test]
    fn duplicate_members_are_fetched_once() {
        let client = client_with_outlets(2, &[0, 1]).with_document(
            COLLECTION,
            json!({
                "Members": [
                    {"@odata.id": outlet_uri(0)},
                    {"@odata.id": outlet_uri(0)},
                    {"@odata.id": outlet_uri(1)}
                ]
            })
            .to_string(),
        );

        let result = list_referenced::<Outlet, _>(&client, COLLECTION).unwrap();
        assert_eq!(result.attempted(), 2);
        assert_eq!(result.error().unwrap().len(), 2);
        assert_eq!(
            client.gets(),
            vec![COLLECTION.to_string(), outlet_uri(0), outlet_uri(1)]
        );
    }

    #[test]
    fn self_referencing_next_link_terminates() {
        let client = MockClient::new().with_document(
            COLLECTION,
            json!({
                "Members": [{"@odata.id": outlet_uri(0)}],
                "Members@odata.nextLink": COLLECTION,
            })
            .to_string(),
        );
        assert_eq!(get_collection(&client, COLLECTION).unwrap(), vec![outlet_uri(0)]);
    }
}
