//! EBS volumes: `CreateVolume`.

use super::common::*;
use crate::shape::{ec2_enum, ec2_shape};
use chrono::{DateTime, Utc};

ec2_enum! {
    pub enum VolumeState {
        Creating => "creating",
        Available => "available",
        InUse => "in-use",
        Deleting => "deleting",
        Deleted => "deleted",
        Error => "error",
    }
}

ec2_enum! {
    pub enum VolumeAttachmentState {
        Attaching => "attaching",
        Attached => "attached",
        Detaching => "detaching",
        Detached => "detached",
        Busy => "busy",
    }
}

ec2_shape! {
    pub struct CreateVolumeRequest {
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "AvailabilityZone"),
        encrypted / with_encrypted: bool => ("Encrypted", "encrypted"),
        /// Required for `io1`.
        iops / with_iops: i32 => ("Iops", "Iops"),
        kms_key_id / with_kms_key_id: String => ("KmsKeyId", "KmsKeyId"),
        outpost_arn / with_outpost_arn: String => ("OutpostArn", "OutpostArn"),
        /// GiB. Required unless creating from a snapshot.
        size / with_size: i32 => ("Size", "Size"),
        snapshot_id / with_snapshot_id: String => ("SnapshotId", "SnapshotId"),
        volume_type / with_volume_type: VolumeType => ("VolumeType", "VolumeType"),
        dry_run / with_dry_run: bool => ("DryRun", "dryRun"),
        tag_specifications / with_tag_specifications: Vec<TagSpecification> => ("TagSpecification", "TagSpecification"),
        multi_attach_enabled / with_multi_attach_enabled: bool => ("MultiAttachEnabled", "MultiAttachEnabled"),
    }
}

ec2_shape! {
    pub struct VolumeAttachment {
        attach_time / with_attach_time: DateTime<Utc> => ("AttachTime", "attachTime"),
        device / with_device: String => ("Device", "device"),
        instance_id / with_instance_id: String => ("InstanceId", "instanceId"),
        state / with_state: VolumeAttachmentState => ("State", "status"),
        volume_id / with_volume_id: String => ("VolumeId", "volumeId"),
        delete_on_termination / with_delete_on_termination: bool => ("DeleteOnTermination", "deleteOnTermination"),
    }
}

ec2_shape! {
    /// An EBS volume.
    pub struct Volume {
        attachments / with_attachments: Vec<VolumeAttachment> => ("Attachments", "attachmentSet"),
        availability_zone / with_availability_zone: String => ("AvailabilityZone", "availabilityZone"),
        create_time / with_create_time: DateTime<Utc> => ("CreateTime", "createTime"),
        encrypted / with_encrypted: bool => ("Encrypted", "encrypted"),
        kms_key_id / with_kms_key_id: String => ("KmsKeyId", "kmsKeyId"),
        outpost_arn / with_outpost_arn: String => ("OutpostArn", "outpostArn"),
        size / with_size: i32 => ("Size", "size"),
        snapshot_id / with_snapshot_id: String => ("SnapshotId", "snapshotId"),
        state / with_state: VolumeState => ("State", "status"),
        volume_id / with_volume_id: String => ("VolumeId", "volumeId"),
        iops / with_iops: i32 => ("Iops", "iops"),
        tags / with_tags: Vec<Tag> => ("Tags", "tagSet"),
        volume_type / with_volume_type: VolumeType => ("VolumeType", "volumeType"),
        fast_restored / with_fast_restored: bool => ("FastRestored", "fastRestored"),
        multi_attach_enabled / with_multi_attach_enabled: bool => ("MultiAttachEnabled", "multiAttachEnabled"),
    }
}

/// `CreateVolume` answers with the new volume's fields at the top level.
pub type CreateVolumeResult = Volume;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::query::{QueryParams, QueryValue};
    use crate::protocol::xml::{XmlNode, XmlValue};
    use chrono::TimeZone;

    #[test]
    fn create_volume_query() {
        let req = CreateVolumeRequest::new()
            .with_availability_zone("us-east-1a")
            .with_size(80)
            .with_volume_type(VolumeType::Io1)
            .with_iops(4000)
            .with_tag_specifications(vec![TagSpecification::new()
                .with_resource_type(ResourceType::Volume)
                .with_tags(vec![Tag::pair("purpose", "db")])]);
        let mut params = QueryParams::new();
        req.write_query("", &mut params);
        assert_eq!(params.get("Size"), Some("80"));
        assert_eq!(params.get("VolumeType"), Some("io1"));
        assert_eq!(params.get("TagSpecification.1.ResourceType"), Some("volume"));
        assert_eq!(params.get("TagSpecification.1.Tag.1.Key"), Some("purpose"));
        assert_eq!(CreateVolumeRequest::read_query("", &params).unwrap(), Some(req));
    }

    #[test]
    fn parse_create_volume_response() {
        let xml = r#"<CreateVolumeResponse xmlns="http://ec2.amazonaws.com/doc/2016-11-15/">
            <requestId>59dbff89-35bd-4eac-99ed-be587EXAMPLE</requestId>
            <volumeId>vol-1234567890abcdef0</volumeId>
            <size>80</size>
            <snapshotId/>
            <availabilityZone>us-east-1a</availabilityZone>
            <status>creating</status>
            <createTime>2019-08-03T19:37:16.000Z</createTime>
            <volumeType>io1</volumeType>
            <iops>4000</iops>
            <encrypted>false</encrypted>
            <multiAttachEnabled>false</multiAttachEnabled>
        </CreateVolumeResponse>"#;
        let volume = CreateVolumeResult::read_xml(&XmlNode::parse(xml).unwrap()).unwrap();
        assert_eq!(volume.volume_id.as_deref(), Some("vol-1234567890abcdef0"));
        assert_eq!(volume.state, Some(VolumeState::Creating));
        assert_eq!(volume.size, Some(80));
        assert_eq!(volume.snapshot_id.as_deref(), Some(""));
        assert_eq!(
            volume.create_time,
            Some(Utc.with_ymd_and_hms(2019, 8, 3, 19, 37, 16).unwrap())
        );
        assert_eq!(volume.attachments, None);
    }
}
