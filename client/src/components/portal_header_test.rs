use portal::Role;

use super::*;

#[test]
fn role_label_covers_every_role() {
    let labels: Vec<_> = Role::ALL.into_iter().map(role_label).collect();
    assert_eq!(labels, vec!["Student", "Tutor", "Admin", "Manager", "Super admin"]);
}
