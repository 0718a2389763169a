//! Serialized form of a [`PriorityQueue`].
//!
//! A queue is written as its extract flags, the next serial it would hand out, and its entries in
//! extraction order, each with the serial it was given on insertion. Keeping the serials makes a
//! restored queue break ties exactly like the queue it was written from, also for entries inserted
//! afterwards.
use bincode::Options;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use fastqueue_core::{KeyedHeap, Priority};

use crate::prelude::*;
use crate::queue::{EntryKey, PriorityQueue};
use crate::types::ExtractFlags;

#[derive(Serialize)]
struct QueueStateRef<'a, T, P> {
    flags: ExtractFlags,
    serial: i64,
    entries: Vec<EntryRef<'a, T, P>>,
}

#[derive(Serialize)]
struct EntryRef<'a, T, P> {
    data: &'a T,
    priority: P,
    serial: i64,
}

#[derive(Deserialize)]
struct QueueState<T, P> {
    flags: ExtractFlags,
    serial: i64,
    entries: Vec<PersistedEntry<T, P>>,
}

#[derive(Deserialize)]
struct PersistedEntry<T, P> {
    data: T,
    priority: P,
    serial: i64,
}

impl<T, P: Priority> PriorityQueue<T, P> {
    fn from_state(state: QueueState<T, P>) -> Result<Self> {
        // Serials count down, the next insertion must be able to take one.
        if state.serial == i64::MIN {
            return Err(Error::CorruptState(format!(
                "next serial {} is exhausted",
                state.serial
            )));
        }

        let mut seen = HashSet::default();
        seen.reserve(state.entries.len());

        let mut nodes = Vec::with_capacity(state.entries.len());

        for entry in state.entries {
            if entry.serial <= state.serial {
                return Err(Error::CorruptState(format!(
                    "entry serial {} has not been issued yet (next serial is {})",
                    entry.serial, state.serial
                )));
            }

            if !seen.insert(entry.serial) {
                return Err(Error::CorruptState(format!(
                    "entry serial {} occurs more than once",
                    entry.serial
                )));
            }

            let key = EntryKey {
                priority: entry.priority,
                serial: entry.serial,
            };

            nodes.push((key, entry.data));
        }

        // Entries are written in extraction order, so this is normally already a heap.
        let heap = KeyedHeap::from_vec(nodes);

        debug!(
            "restored queue with {} entries (flags: {}, next serial: {})",
            heap.len(),
            state.flags,
            state.serial
        );

        Ok(Self {
            heap,
            serial: state.serial,
            flags: state.flags,
        })
    }
}

impl<T, P> Serialize for PriorityQueue<T, P>
where
    T: Serialize,
    P: Priority + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries = self
            .heap
            .ordered()
            .map(|(key, data)| EntryRef {
                data,
                priority: key.priority,
                serial: key.serial,
            })
            .collect();

        QueueStateRef {
            flags: self.flags,
            serial: self.serial,
            entries,
        }
        .serialize(serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for PriorityQueue<T, P>
where
    T: Deserialize<'de>,
    P: Priority + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let state = QueueState::deserialize(deserializer)?;
        Self::from_state(state).map_err(<D::Error as de::Error>::custom)
    }
}

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_varint_encoding()
}

/// Encode a queue into a compact binary buffer.
pub fn to_bytes<T, P>(queue: &PriorityQueue<T, P>) -> Result<Vec<u8>>
where
    T: Serialize,
    P: Priority + Serialize,
{
    Ok(options().serialize(queue)?)
}

/// Decode a queue previously encoded with [`to_bytes`].
pub fn from_bytes<T, P>(buffer: &[u8]) -> Result<PriorityQueue<T, P>>
where
    T: DeserializeOwned,
    P: Priority + DeserializeOwned,
{
    Ok(options().deserialize(buffer)?)
}

pub fn to_json<T, P>(queue: &PriorityQueue<T, P>) -> Result<String>
where
    T: Serialize,
    P: Priority + Serialize,
{
    Ok(serde_json::to_string(queue)?)
}

pub fn from_json<T, P>(input: &str) -> Result<PriorityQueue<T, P>>
where
    T: DeserializeOwned,
    P: Priority + DeserializeOwned,
{
    Ok(serde_json::from_str(input)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::Extracted;

    fn queue() -> PriorityQueue<String> {
        let mut queue = PriorityQueue::new();
        for (data, priority) in [
            ("test3", -1),
            ("test5", -10),
            ("test1", 5),
            ("test2", 2),
            ("test4", -1),
            ("test6", -10),
        ]
        .iter()
        {
            queue.insert(data.to_string(), *priority);
        }

        queue
    }

    fn assert_same(a: &PriorityQueue<String>, b: &PriorityQueue<String>) {
        assert_eq!(a.len(), b.len());
        assert_eq!(a.extract_flags(), b.extract_flags());
        assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut queue = queue();
        queue.set_extract_flags(ExtractFlags::Both);

        let restored = from_bytes(&to_bytes(&queue).unwrap()).unwrap();
        assert_same(&queue, &restored);
    }

    #[test]
    fn test_json_round_trip() {
        let queue = queue();

        let restored = from_json(&to_json(&queue).unwrap()).unwrap();
        assert_same(&queue, &restored);
    }

    #[test]
    fn test_empty_round_trip() {
        let queue = PriorityQueue::<String>::new();

        let restored = from_bytes(&to_bytes(&queue).unwrap()).unwrap();
        assert_same(&queue, &restored);
        assert!(restored.is_empty());
    }

    #[test]
    fn test_insert_after_restore() {
        let mut queue = queue();
        let mut restored: PriorityQueue<String> = from_json(&to_json(&queue).unwrap()).unwrap();

        for q in [&mut queue, &mut restored].iter_mut() {
            q.insert("test7".to_string(), -1);
            q.insert("test0".to_string(), 2);
        }

        assert_same(&queue, &restored);

        let mut order = vec![];
        while let Some(Extracted::Data(data)) = restored.extract() {
            order.push(data);
        }

        assert_eq!(
            order,
            ["test1", "test2", "test0", "test3", "test4", "test7", "test5", "test6"]
        );
    }

    #[test]
    fn test_insert_at_last_serial() {
        let last = format!(r#"{{"flags":"Data","serial":{},"entries":[]}}"#, i64::MIN + 1);
        let mut restored = from_json::<String, i64>(&last).unwrap();

        restored.insert("a".to_string(), 1);
        assert_eq!(restored.extract(), Some(Extracted::Data("a".to_string())));
    }

    #[test]
    fn test_restore_unsorted_entries() {
        let shuffled = r#"{"flags":"Data","serial":-4,"entries":[
            {"data":"c","priority":1,"serial":-2},
            {"data":"a","priority":1,"serial":0},
            {"data":"d","priority":-3,"serial":-3},
            {"data":"b","priority":1,"serial":-1}]}"#;
        let restored = from_json::<String, i64>(shuffled).unwrap();

        let order: Vec<_> = restored.iter().filter_map(|e| e.into_data().cloned()).collect();
        assert_eq!(order, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_json_layout() {
        let mut queue = PriorityQueue::new();
        queue.insert("a", 1);
        queue.insert("b", 1);

        assert_eq!(
            to_json(&queue).unwrap(),
            concat!(
                r#"{"flags":"Data","serial":-2,"entries":["#,
                r#"{"data":"a","priority":1,"serial":0},"#,
                r#"{"data":"b","priority":1,"serial":-1}]}"#
            )
        );
    }

    #[test]
    fn test_corrupt_state() {
        let unissued = r#"{"flags":"Data","serial":-1,"entries":[{"data":"a","priority":1,"serial":-1}]}"#;
        let err = from_json::<String, i64>(unissued).unwrap_err();
        assert!(err.to_string().contains("has not been issued"), "{}", err);

        let duplicate = r#"{"flags":"Both","serial":-5,"entries":[
            {"data":"a","priority":1,"serial":-2},
            {"data":"b","priority":3,"serial":-2}]}"#;
        let err = from_json::<String, i64>(duplicate).unwrap_err();
        assert!(err.to_string().contains("more than once"), "{}", err);

        let exhausted = format!(r#"{{"flags":"Data","serial":{},"entries":[]}}"#, i64::MIN);
        let err = from_json::<String, i64>(&exhausted).unwrap_err();
        assert!(err.to_string().contains("is exhausted"), "{}", err);

        assert!(matches!(from_bytes::<String, i64>(&[0xff, 0xff]), Err(Error::Bincode(_))));
    }
}
