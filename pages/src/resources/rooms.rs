// pages/src/resources/rooms.rs
use models::medical::{Room, RoomDraft, RoomStatus, RoomType};

use crate::list_controller::{FilterSet, Searchable};
use crate::page::ResourcePage;

impl Searchable for Room {
    fn search_haystack(&self) -> Vec<String> {
        let mut fields = vec![self.name.clone()];
        fields.extend(self.equipment.iter().cloned());
        fields
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomFilters {
    pub room_type: Option<RoomType>,
    pub status: Option<RoomStatus>,
}

impl FilterSet<Room> for RoomFilters {
    fn matches(&self, item: &Room) -> bool {
        self.room_type.map_or(true, |t| item.room_type == t)
            && self.status.map_or(true, |s| item.status == s)
    }

    fn is_neutral(&self) -> bool {
        self.room_type.is_none() && self.status.is_none()
    }
}

pub type RoomsPage = ResourcePage<Room, RoomDraft, RoomFilters>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipment_is_searchable() {
        let room = Room {
            id: 1,
            name: "OR-1".into(),
            room_type: RoomType::Operating,
            capacity: 6,
            status: RoomStatus::Available,
            equipment: vec!["anesthesia cart".into()],
        };
        assert!(room
            .search_haystack()
            .iter()
            .any(|f| f.contains("anesthesia")));
    }
}
