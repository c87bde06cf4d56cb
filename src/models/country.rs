// src/models/country.rs

use std::collections::HashMap;

use serde_yaml::Mapping;

use crate::models::{Group, GroupId, GroupKind};

/// コールサイン番号の初期値（最初の払い出しは 100）
const INITIAL_CALLSIGN_ID: u32 = 99;

/// 挿入順を保つグループの集合（ID索引付き）
#[derive(Debug, Clone, Default)]
pub struct GroupCollection {
    groups: Vec<Group>,
    index: HashMap<GroupId, usize>,
}

impl GroupCollection {
    /// 末尾に追加する（重複は排除しない）
    pub fn push(&mut self, group: Group) {
        self.index.entry(group.id).or_insert(self.groups.len());
        self.groups.push(group);
    }

    pub fn get(&self, id: GroupId) -> Option<&Group> {
        self.index.get(&id).map(|&i| &self.groups[i])
    }

    pub fn get_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.index.get(&id).copied().and_then(move |i| self.groups.get_mut(i))
    }

    /// 名前に `pattern` を含む最初のグループ
    pub fn find_by_name(&self, pattern: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name.contains(pattern))
    }

    pub fn as_slice(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 1 始まりの連番をキーにしたマップ
    pub fn serialize(&self) -> Mapping {
        let mut d = Mapping::new();
        for (i, group) in self.groups.iter().enumerate() {
            d.insert((i + 1).into(), group.serialize().into());
        }
        d
    }
}

/// 国（陣営に属し、種別ごとにグループを保持する）
#[derive(Debug, Clone)]
pub struct Country {
    pub id: u32,
    pub name: String,
    collections: [GroupCollection; 5],
    current_callsign_id: u32,
}

impl Country {
    pub fn new(id: u32, name: &str) -> Self {
        Country {
            id,
            name: name.to_string(),
            collections: Default::default(),
            current_callsign_id: INITIAL_CALLSIGN_ID,
        }
    }

    /// グループ自身の種別の集合に追加する
    pub fn add_group(&mut self, group: Group) {
        self.collections[group.kind.index()].push(group);
    }

    pub fn groups(&self, kind: GroupKind) -> &[Group] {
        self.collections[kind.index()].as_slice()
    }

    /// ID によるグループ検索
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.collections.iter().find_map(|c| c.get(id))
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.collections.iter_mut().find_map(|c| c.get_mut(id))
    }

    /// 名前の部分一致による検索（最初に追加されたものを返す）
    pub fn find_group(&self, kind: GroupKind, name: &str) -> Option<&Group> {
        self.collections[kind.index()].find_by_name(name)
    }

    /// 次のコールサイン番号を払い出す
    pub fn next_callsign_id(&mut self) -> u32 {
        self.current_callsign_id += 1;
        self.current_callsign_id
    }

    pub fn group_count(&self) -> usize {
        self.collections.iter().map(GroupCollection::len).sum()
    }

    pub fn unit_count(&self, kind: GroupKind) -> usize {
        self.groups(kind).iter().map(|g| g.units.len()).sum()
    }

    /// 空の種別はキーごと省略する
    pub fn serialize(&self) -> Mapping {
        let mut d = Mapping::new();
        d.insert("name".into(), self.name.clone().into());
        d.insert("id".into(), self.id.into());
        for kind in GroupKind::ALL {
            let collection = &self.collections[kind.index()];
            if collection.is_empty() {
                continue;
            }
            let mut section = Mapping::new();
            section.insert("group".into(), collection.serialize().into());
            d.insert(kind.key().into(), section.into());
        }
        d
    }
}
