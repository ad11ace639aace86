use crate::Error;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct UserId(pub i64);

impl UserId {
    pub fn stub() -> UserId {
        UserId(0)
    }
}

/// Participant number within one conversation; the same account gets a
/// different pid in each conversation it takes part in.
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct ParticipantId(pub i64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub uid: UserId,
    pub hname: String,
    pub email: String,
    pub site_admin: bool,
}

/// Participant selector as it appears on the wire: either a concrete pid,
/// or the string `"mypid"`, which the backend resolves from the auth token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pid {
    Mine,
    Id(ParticipantId),
}

impl serde::Serialize for Pid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Pid::Mine => serializer.serialize_str("mypid"),
            Pid::Id(pid) => serializer.serialize_i64(pid.0),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Pid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Pid, D::Error> {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Pid;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "\"mypid\" or a participant number")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Pid, E> {
                match v {
                    "mypid" => Ok(Pid::Mine),
                    _ => Err(E::invalid_value(serde::de::Unexpected::Str(v), &self)),
                }
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Pid, E> {
                Ok(Pid::Id(ParticipantId(v)))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Pid, E> {
                Ok(Pid::Id(ParticipantId(v as i64)))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

impl User {
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.hname)?;
        crate::validate_string(&self.email)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pid_roundtrips_on_the_wire() {
        assert_eq!(serde_json::to_string(&Pid::Mine).unwrap(), "\"mypid\"");
        assert_eq!(
            serde_json::to_string(&Pid::Id(ParticipantId(42))).unwrap(),
            "42"
        );
        assert_eq!(
            serde_json::from_str::<Pid>("\"mypid\"").unwrap(),
            Pid::Mine
        );
        assert_eq!(
            serde_json::from_str::<Pid>("42").unwrap(),
            Pid::Id(ParticipantId(42))
        );
    }
}
