//! Fixed department floor plan
//!
//! The literal topology tables for the building: every door, corridor and
//! junction with its map coordinates, plus the ordered connection rules
//! with their weight multipliers. Table order is load-bearing - a later
//! rule for a pair overrides an earlier one, so replaying the list always
//! lands on the same final weights.

use crate::errors::GraphError;
use crate::graph::LocationKind::{Addressable, Structural};
use crate::graph::{Graph, LocationKind};

/// Every mapped location: id, x, y, classification
/// Doors, corridors and the main entrance are addressable route endpoints;
/// numbered junctions only shape the corridor topology
const LOCATIONS: &[(&str, f64, f64, LocationKind)] = &[
    // Door locations, positioned at their room boundaries
    ("Library_door", 292.0, 253.0, Addressable),
    ("Exam_Office_door", 482.0, 137.0, Addressable),
    ("Bath_3_door", 547.3, 121.0, Addressable),
    ("Room_9_door", 557.3, 117.0, Addressable),
    ("Room_8_door", 561.5, 100.0, Addressable),
    ("Room_7_door", 561.5, 72.0, Addressable),
    ("Faculty_Lounge_door", 561.5, 50.0, Addressable),
    ("Room_6_door", 538.0, 41.5, Addressable),
    ("Room_5_door", 511.0, 41.5, Addressable),
    ("Conference_Room_door", 385.0, 41.0, Addressable),
    ("Bath_2_door", 364.5, 41.0, Addressable),
    ("Principal_Office_door", 350.0, 50.0, Addressable),
    ("Room_3_door", 350.0, 94.0, Addressable),
    ("Room_2_door", 350.0, 133.0, Addressable),
    ("Room_1_door", 363.0, 133.0, Addressable),
    ("Bath_1_door", 363.0, 107.0, Addressable),
    ("Treasure_Office_door", 385.0, 61.0, Addressable),
    ("Admission_Office_door", 439.5, 137.0, Addressable),
    // Doors on the laboratory wing
    ("Geology_Lab_door", 301.0, 407.0, Addressable),
    ("1st_Floor_Stairs_door", 301.0, 483.0, Addressable),
    ("Experiment_Lab_door", 229.0, 392.0, Addressable),
    ("Water_Test_Lab_door", 229.0, 538.0, Addressable),
    ("Seminar_Hall_door", 139.0, 392.0, Addressable),
    ("Toxicology_Lab_door", 139.0, 538.0, Addressable),
    ("Biology_Lab_door", 96.0, 399.5, Addressable),
    ("Chemistry_Lab_door", 96.0, 531.0, Addressable),
    ("Male_Common_Room_door", 90.0, 415.0, Addressable),
    ("Female_Common_Room_door", 90.0, 435.0, Addressable),
    ("AAS_Lab_door", 90.0, 481.0, Addressable),
    ("Photocopy_Shop_door", 631.0, 420.0, Addressable),
    ("Reception_door", 631.0, 512.0, Addressable),
    ("Room_101_door", 639.0, 396.0, Addressable),
    ("Room_110_door", 639.0, 534.0, Addressable),
    ("Room_102_door", 683.0, 390.0, Addressable),
    ("Culinary_Lab_door", 683.0, 538.0, Addressable),
    ("Room_103_door", 770.0, 390.0, Addressable),
    ("Room_108_door", 770.0, 538.0, Addressable),
    ("Room_104_door", 813.0, 396.7, Addressable),
    ("Room_107_door", 813.0, 533.6, Addressable),
    ("Room_105_door", 819.0, 428.0, Addressable),
    ("Room_106_door", 819.0, 499.5, Addressable),
    ("Computer_Lab_door", 271.5, 530.0, Addressable),
    // Named corridors and the main entrance
    ("1st_Corridor_Main", 461.0, 227.0, Addressable),
    ("1st_Corridor_Library", 425.0, 253.0, Addressable),
    ("1st_Corridor_Top", 461.0, 279.0, Addressable),
    ("Main_Entrance", 461.0, 50.0, Addressable),
    ("2nd_Corridor_Main", 461.0, 446.5, Addressable),
    ("2nd_Corridor_Left", 442.0, 466.0, Addressable),
    ("2nd_Corridor_Right", 479.0, 466.0, Addressable),
    // Routing junctions
    ("Junction_1", 356.4, 133.0, Structural),
    ("Junction_2", 356.4, 107.0, Structural),
    ("Junction_3", 356.4, 94.0, Structural),
    ("Junction_4", 356.4, 50.0, Structural),
    ("Junction_5", 364.5, 50.0, Structural),
    ("Junction_6", 385.0, 50.0, Structural),
    ("Junction_7", 461.0, 137.0, Structural),
    ("Junction_9", 511.0, 50.0, Structural),
    ("Junction_10", 538.0, 50.0, Structural),
    ("Junction_11", 552.0, 50.0, Structural),
    ("Junction_12", 552.0, 72.0, Structural),
    ("Junction_13", 552.0, 100.0, Structural),
    ("Junction_14", 552.0, 109.0, Structural),
    ("Junction_15", 547.3, 109.0, Structural),
    ("Junction_16", 461.0, 109.0, Structural),
    ("Junction_17", 461.0, 253.0, Structural),
    ("Junction_18", 461.0, 466.0, Structural),
    ("Junction_19", 301.0, 466.0, Structural),
    ("Junction_20", 261.0, 466.0, Structural),
    ("Junction_21", 229.0, 403.0, Structural),
    ("Junction_22", 139.0, 403.0, Structural),
    ("Junction_23", 103.0, 403.0, Structural),
    ("Junction_24", 103.0, 415.0, Structural),
    ("Junction_25", 103.0, 435.0, Structural),
    ("Junction_26", 103.0, 481.0, Structural),
    ("Junction_27", 103.0, 528.0, Structural),
    ("Junction_28", 139.0, 528.0, Structural),
    ("Junction_29", 229.0, 528.0, Structural),
    ("Junction_30", 261.0, 528.0, Structural),
    ("Junction_31", 643.0, 466.0, Structural),
    ("Junction_32", 643.0, 530.0, Structural),
    ("Junction_33", 643.0, 512.0, Structural),
    ("Junction_34", 643.0, 420.0, Structural),
    ("Junction_35", 643.0, 400.0, Structural),
    ("Junction_36", 683.0, 400.0, Structural),
    ("Junction_37", 770.0, 400.0, Structural),
    ("Junction_38", 806.0, 400.0, Structural),
    ("Junction_39", 806.0, 428.0, Structural),
    ("Junction_40", 806.0, 499.5, Structural),
    ("Junction_41", 806.0, 530.0, Structural),
    ("Junction_42", 683.0, 530.0, Structural),
    ("Junction_43", 770.0, 530.0, Structural),
    ("Junction_44", 261.0, 403.0, Structural),
    ("Junction_45", 301.0, 415.0, Structural),
];

/// Ordered connection rules: endpoints plus weight multiplier
/// 1.0 is a neutral corridor segment, 0.5 a preferred shortcut, and the
/// 5/10/20/50 factors penalize links that exist only for physical
/// connectivity. Some pairs appear more than once; the last entry wins.
const CONNECTIONS: &[(&str, &str, f64)] = &[
    // Entrance hall
    ("Main_Entrance", "Junction_7", 1.0),
    ("Junction_7", "Exam_Office_door", 1.0),
    ("Junction_7", "Admission_Office_door", 1.0),
    // Preferred direct path toward the Room 5 area
    ("Main_Entrance", "Junction_9", 0.5),
    // Main corridor, west run
    ("Main_Entrance", "Junction_6", 1.0),
    ("Junction_6", "Junction_5", 1.0),
    ("Junction_5", "Junction_4", 1.0),
    ("Junction_4", "Junction_3", 1.0),
    ("Junction_3", "Junction_2", 1.0),
    ("Conference_Room_door", "Junction_6", 1.0),
    ("1st_Corridor_Main", "Junction_7", 1.0),
    ("Bath_2_door", "Junction_5", 1.0),
    ("Junction_5", "Junction_6", 1.0),
    ("Principal_Office_door", "Junction_4", 1.0),
    ("Junction_4", "Junction_5", 1.0),
    ("Room_3_door", "Junction_3", 1.0),
    ("Junction_3", "Junction_4", 1.0),
    ("Bath_1_door", "Junction_2", 1.0),
    ("Junction_2", "Junction_3", 1.0),
    ("Room_1_door", "Junction_1", 1.0),
    ("Room_2_door", "Junction_1", 1.0),
    ("Junction_1", "Junction_2", 1.0),
    // East corridor
    ("Bath_3_door", "Junction_15", 1.0),
    ("Junction_15", "Junction_14", 1.0),
    ("Junction_15", "Junction_16", 1.0),
    ("Room_9_door", "Junction_14", 1.0),
    ("Junction_14", "Junction_13", 1.0),
    ("Room_8_door", "Junction_13", 1.0),
    ("Junction_13", "Junction_12", 1.0),
    ("Room_7_door", "Junction_12", 1.0),
    ("Junction_12", "Junction_11", 1.0),
    ("Faculty_Lounge_door", "Junction_11", 1.0),
    ("Junction_11", "Junction_4", 1.0),
    ("Junction_11", "Junction_10", 1.0),
    ("Room_6_door", "Junction_10", 1.0),
    ("Junction_10", "Junction_9", 1.0),
    ("Room_5_door", "Junction_9", 1.0),
    ("Junction_9", "Junction_6", 1.0),
    ("Junction_10", "Junction_6", 1.0),
    ("Room_7_door", "Junction_12", 1.0),
    ("Room_8_door", "Junction_13", 1.0),
    ("Room_9_door", "Junction_14", 1.0),
    // Keep through-traffic off the east door row
    ("Junction_9", "Junction_10", 5.0),
    ("Junction_10", "Junction_11", 5.0),
    ("Junction_11", "Junction_12", 5.0),
    ("Junction_12", "Junction_13", 5.0),
    ("Junction_13", "Junction_14", 5.0),
    ("Junction_16", "Treasure_Office_door", 1.0),
    ("Main_Entrance", "Junction_16", 1.0),
    ("Junction_16", "Junction_7", 1.0),
    // Library
    ("1st_Corridor_Library", "Library_door", 1.0),
    ("1st_Corridor_Main", "1st_Corridor_Library", 1.0),
    ("Junction_17", "Library_door", 1.0),
    ("Junction_17", "Junction_7", 1.0),
    ("1st_Corridor_Library", "1st_Corridor_Top", 0.5),
    // Link to the second floor
    ("1st_Corridor_Main", "Junction_17", 1.0),
    ("Junction_17", "1st_Corridor_Top", 1.0),
    ("1st_Corridor_Top", "2nd_Corridor_Main", 1.0),
    ("2nd_Corridor_Main", "Junction_18", 1.0),
    ("Junction_18", "2nd_Corridor_Left", 1.0),
    ("Junction_18", "2nd_Corridor_Right", 1.0),
    ("Junction_19", "Junction_18", 1.0),
    // Laboratory wing, preferred through Junction_20/Junction_19
    ("Junction_44", "Junction_20", 0.5),
    ("Junction_20", "Junction_19", 0.5),
    ("Junction_44", "Junction_21", 1.0),
    ("Junction_44", "Junction_45", 5.0),
    ("Junction_45", "Geology_Lab_door", 5.0),
    ("Junction_21", "Junction_22", 1.0),
    ("Junction_22", "Junction_23", 1.0),
    ("Junction_23", "Junction_24", 1.0),
    ("Junction_24", "Junction_25", 1.0),
    ("Junction_25", "Junction_26", 1.0),
    ("Junction_26", "Junction_27", 1.0),
    ("Junction_27", "Junction_28", 1.0),
    ("Junction_28", "Junction_29", 1.0),
    ("Junction_29", "Junction_30", 1.0),
    ("Junction_19", "Geology_Lab_door", 1.0),
    ("Junction_17", "Junction_18", 1.0),
    ("Junction_44", "Junction_45", 1.0),
    ("Junction_19", "1st_Floor_Stairs_door", 1.0),
    ("Junction_44", "Experiment_Lab_door", 1.0),
    ("Junction_22", "Seminar_Hall_door", 1.0),
    ("Junction_23", "Biology_Lab_door", 1.0),
    ("Junction_24", "Male_Common_Room_door", 1.0),
    ("Junction_25", "Female_Common_Room_door", 1.0),
    ("Junction_26", "AAS_Lab_door", 1.0),
    ("Junction_27", "Chemistry_Lab_door", 1.0),
    ("Junction_28", "Toxicology_Lab_door", 1.0),
    ("Junction_29", "Water_Test_Lab_door", 1.0),
    ("Junction_30", "Computer_Lab_door", 1.0),
    // Classroom wing ring
    ("2nd_Corridor_Right", "Junction_31", 5.0),
    ("Junction_31", "Junction_32", 1.0),
    ("Junction_32", "Junction_33", 1.0),
    ("Junction_33", "Junction_34", 1.0),
    ("Junction_34", "Junction_35", 1.0),
    ("Junction_35", "Junction_36", 1.0),
    ("Junction_36", "Junction_37", 1.0),
    ("Junction_37", "Junction_38", 1.0),
    ("Junction_38", "Junction_39", 1.0),
    ("Junction_39", "Junction_40", 1.0),
    ("Junction_40", "Junction_41", 1.0),
    ("Junction_41", "Junction_43", 1.0),
    ("Junction_43", "Junction_42", 1.0),
    ("Junction_32", "Room_110_door", 1.0),
    ("Junction_33", "Reception_door", 1.0),
    ("Junction_34", "Photocopy_Shop_door", 1.0),
    ("Junction_35", "Room_101_door", 1.0),
    ("Junction_36", "Room_102_door", 1.0),
    ("Junction_37", "Room_103_door", 1.0),
    ("Junction_38", "Room_104_door", 1.0),
    ("Junction_39", "Room_105_door", 1.0),
    ("Junction_40", "Room_106_door", 1.0),
    ("Junction_41", "Room_107_door", 1.0),
    ("Junction_43", "Room_108_door", 1.0),
    ("Junction_42", "Culinary_Lab_door", 1.0),
    ("Junction_42", "Junction_32", 1.0),
    ("Junction_20", "Junction_30", 1.0),
    ("Junction_4", "Junction_1", 1.0),
    // Funnel classroom-wing traffic away from the corridor mouth
    ("Junction_35", "2nd_Corridor_Right", 10.0),
    ("Junction_36", "2nd_Corridor_Right", 10.0),
    ("2nd_Corridor_Right", "Junction_31", 20.0),
    ("Junction_37", "Junction_36", 1.0),
    ("Junction_36", "Junction_35", 1.0),
    ("Junction_35", "Junction_34", 1.0),
    ("Junction_34", "Junction_31", 1.0),
    ("Junction_31", "2nd_Corridor_Right", 1.0),
    ("Room_103_door", "Junction_36", 1.0),
    ("Junction_38", "Junction_37", 1.0),
    ("Junction_39", "Junction_38", 1.0),
    ("Room_103_door", "2nd_Corridor_Right", 50.0),
    ("Room_103_door", "2nd_Corridor_Main", 50.0),
    ("Junction_37", "2nd_Corridor_Right", 50.0),
    ("Junction_37", "2nd_Corridor_Main", 50.0),
    ("Junction_38", "2nd_Corridor_Right", 50.0),
    ("Junction_38", "2nd_Corridor_Main", 50.0),
    ("Junction_39", "2nd_Corridor_Right", 50.0),
    ("Junction_39", "2nd_Corridor_Main", 50.0),
    ("2nd_Corridor_Right", "2nd_Corridor_Main", 0.5),
];

/// Build the department graph from the literal tables
pub fn department_graph() -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    for &(id, x, y, kind) in LOCATIONS {
        graph.add_location(id, x, y, kind)?;
    }
    for &(a, b, multiplier) in CONNECTIONS {
        graph.connect_weighted(a, b, multiplier)?;
    }
    Ok(graph)
}
