use crate::models::{Person2, Personne2};

use jiff::Timestamp;
use remap::{CustomMapper, MappingContext};

/// Converts `Personne2::dtob`, milliseconds since the Unix epoch, to and from
/// the RFC 3339 string in `Person2::dtob`.
pub struct PersonCustomMapper;

impl CustomMapper<Personne2, Person2> for PersonCustomMapper {
    fn map_a_to_b(
        &self,
        personne: &Personne2,
        person: &mut Person2,
        _context: &mut MappingContext,
    ) -> anyhow::Result<()> {
        let dtob = Timestamp::from_millisecond(personne.dtob)?;
        person.dtob = Some(dtob.to_string());
        Ok(())
    }

    fn map_b_to_a(
        &self,
        person: &Person2,
        personne: &mut Personne2,
        _context: &mut MappingContext,
    ) -> anyhow::Result<()> {
        if let Some(dtob) = &person.dtob {
            personne.dtob = dtob.parse::<Timestamp>()?.as_millisecond();
        }
        Ok(())
    }
}
